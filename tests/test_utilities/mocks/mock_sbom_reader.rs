use sbom_licenses::prelude::*;
use std::path::Path;

/// Mock SbomReader/TemplateReader serving in-memory documents
#[derive(Default)]
pub struct MockSbomReader {
    sbom: Option<String>,
    template: Option<String>,
}

impl MockSbomReader {
    pub fn new(sbom: impl Into<String>) -> Self {
        Self {
            sbom: Some(sbom.into()),
            template: None,
        }
    }

    /// A reader for which every SBOM path is missing
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<String> {
        self.sbom.clone().ok_or_else(|| {
            LicenseReportError::SbomNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }
}

impl TemplateReader for MockSbomReader {
    fn read_template(&self, path: &Path) -> Result<String> {
        self.template.clone().ok_or_else(|| {
            LicenseReportError::FileReadError {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()
        })
    }
}
