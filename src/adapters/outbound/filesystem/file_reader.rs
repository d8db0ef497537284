use crate::ports::outbound::{SbomReader, TemplateReader};
use crate::shared::error::LicenseReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading input files from the file system
///
/// This adapter implements both SbomReader and TemplateReader ports, and is
/// reused by the compatibility table loader for its raw file access.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    pub fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        tracing::debug!(path = %path.display(), bytes = file_size, "reading {}", file_type);

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(LicenseReportError::SbomNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        self.safe_read_file(path, "SBOM").map_err(|e| {
            LicenseReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path, "template").map_err(|e| {
            LicenseReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
