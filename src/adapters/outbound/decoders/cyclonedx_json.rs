use super::build_component;
use crate::license_audit::domain::{Bom, Component};
use crate::ports::outbound::{DecodeError, SbomDecoder};
use serde::Deserialize;

/// CycloneDxJsonDecoder adapter for CycloneDX JSON documents
pub struct CycloneDxJsonDecoder;

impl CycloneDxJsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxJsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomDecoder for CycloneDxJsonDecoder {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn decode(&self, content: &str) -> Result<Bom, DecodeError> {
        let bom: CdxBom = serde_json::from_str(content).map_err(|e| {
            if e.is_eof() && content.trim().is_empty() {
                DecodeError::Empty
            } else {
                DecodeError::Malformed(e.to_string())
            }
        })?;

        let metadata_component = bom
            .metadata
            .and_then(|metadata| metadata.component)
            .map(CdxComponent::into_domain);
        let components = bom
            .components
            .unwrap_or_default()
            .into_iter()
            .map(CdxComponent::into_domain)
            .collect();

        Ok(Bom::new(metadata_component, components))
    }
}

// =============================================================================
// CycloneDX JSON structures for deserialization
// Only the fields the license report needs; everything else is ignored.
// =============================================================================

#[derive(Debug, Deserialize)]
struct CdxBom {
    metadata: Option<CdxMetadata>,
    components: Option<Vec<CdxComponent>>,
}

#[derive(Debug, Deserialize)]
struct CdxMetadata {
    component: Option<CdxComponent>,
}

#[derive(Debug, Deserialize)]
struct CdxComponent {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: Option<String>,
    licenses: Option<Vec<CdxLicenseChoice>>,
}

impl CdxComponent {
    fn into_domain(self) -> Component {
        let choices = self.licenses.unwrap_or_default().into_iter().map(|choice| {
            let (id, name) = choice
                .license
                .map(|license| (license.id, license.name))
                .unwrap_or((None, None));
            (id, name, choice.expression)
        });
        build_component(self.name, self.version.unwrap_or_default(), choices)
    }
}

#[derive(Debug, Deserialize)]
struct CdxLicenseChoice {
    license: Option<CdxLicense>,
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CdxLicense {
    id: Option<String>,
    name: Option<String>,
}
