use super::build_component;
use crate::license_audit::domain::{Bom, Component};
use crate::ports::outbound::{DecodeError, SbomDecoder};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

/// Name of the root element every CycloneDX XML document carries
const ROOT_ELEMENT: &str = "bom";

/// CycloneDxXmlDecoder adapter for CycloneDX XML documents
pub struct CycloneDxXmlDecoder;

impl CycloneDxXmlDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Local name of the first element, or None when the document has none
    fn root_element_name(content: &str) -> Result<Option<String>, DecodeError> {
        let mut reader = Reader::from_str(content);
        loop {
            match reader.read_event() {
                Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                    let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                    return Ok(Some(name));
                }
                Ok(Event::Eof) => return Ok(None),
                Ok(_) => {}
                Err(e) => return Err(DecodeError::Malformed(e.to_string())),
            }
        }
    }
}

impl Default for CycloneDxXmlDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomDecoder for CycloneDxXmlDecoder {
    fn format_name(&self) -> &'static str {
        "xml"
    }

    fn decode(&self, content: &str) -> Result<Bom, DecodeError> {
        match Self::root_element_name(content)? {
            None => return Err(DecodeError::Empty),
            Some(name) if name != ROOT_ELEMENT => {
                return Err(DecodeError::Malformed(format!(
                    "expected root element <{}> but found <{}>",
                    ROOT_ELEMENT, name
                )))
            }
            Some(_) => {}
        }

        let bom: CdxBomXml =
            quick_xml::de::from_str(content).map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let metadata_component = bom
            .metadata
            .and_then(|metadata| metadata.component)
            .map(CdxComponentXml::into_domain);
        let components = bom
            .components
            .map(|wrapper| wrapper.component)
            .unwrap_or_default()
            .into_iter()
            .map(CdxComponentXml::into_domain)
            .collect();

        Ok(Bom::new(metadata_component, components))
    }
}

// =============================================================================
// CycloneDX XML structures for deserialization
// XML uses wrapper elements for collections (e.g., <components><component>...)
// =============================================================================

#[derive(Debug, Deserialize)]
struct CdxBomXml {
    metadata: Option<CdxMetadataXml>,
    components: Option<CdxComponentsXml>,
}

#[derive(Debug, Deserialize)]
struct CdxMetadataXml {
    component: Option<CdxComponentXml>,
}

#[derive(Debug, Deserialize)]
struct CdxComponentsXml {
    #[serde(rename = "component", default)]
    component: Vec<CdxComponentXml>,
}

#[derive(Debug, Deserialize)]
struct CdxComponentXml {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: Option<String>,
    licenses: Option<CdxLicensesXml>,
}

impl CdxComponentXml {
    fn into_domain(self) -> Component {
        let (licenses, expression) = self
            .licenses
            .map(|wrapper| (wrapper.license, wrapper.expression))
            .unwrap_or_default();
        let choices = licenses
            .into_iter()
            .map(|license| (license.id, license.name, None))
            .chain(expression.map(|expr| (None, None, Some(expr))));
        build_component(self.name, self.version.unwrap_or_default(), choices)
    }
}

/// Licenses wrapper: a list of <license> elements or a single <expression>
#[derive(Debug, Deserialize)]
struct CdxLicensesXml {
    #[serde(rename = "license", default)]
    license: Vec<CdxLicenseXml>,
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CdxLicenseXml {
    id: Option<String>,
    name: Option<String>,
}
