use crate::shared::Result;
use std::path::Path;

/// SbomReader port for reading the raw SBOM document
pub trait SbomReader {
    /// Reads the SBOM file at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    fn read_sbom(&self, path: &Path) -> Result<String>;
}

/// TemplateReader port for reading a user-supplied report template
pub trait TemplateReader {
    /// Reads the template file at `path`
    fn read_template(&self, path: &Path) -> Result<String>;
}
