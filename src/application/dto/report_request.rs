use super::InputFormat;
use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the license report use case
///
/// Fully resolved options: CLI flags, config file and defaults have already
/// been merged by the caller.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the SBOM document
    pub input_path: PathBuf,
    /// Serialized form of the SBOM
    pub format: InputFormat,
    /// Template file; `None` selects the built-in template
    pub template_path: Option<PathBuf>,
    /// Whether to run the compatibility audit
    pub validate: bool,
    /// Compatibility table, loaded only when `validate` is set
    pub compatibility_table_path: PathBuf,
}

impl ReportRequest {
    pub fn new(input_path: PathBuf, format: InputFormat) -> Self {
        Self {
            input_path,
            format,
            template_path: None,
            validate: false,
            compatibility_table_path: PathBuf::from("compatibility.yaml"),
        }
    }

    pub fn with_template(mut self, template_path: PathBuf) -> Self {
        self.template_path = Some(template_path);
        self
    }

    /// Enables the compatibility audit against the table at `table_path`
    pub fn with_validation(mut self, table_path: PathBuf) -> Self {
        self.validate = true;
        self.compatibility_table_path = table_path;
        self
    }
}
