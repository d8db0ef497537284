use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::license_audit::domain::CompatibilityTable;
use crate::ports::outbound::CompatibilityTableLoader;
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use std::path::Path;

/// Default location of the compatibility table, relative to the working directory
pub const DEFAULT_TABLE_PATH: &str = "compatibility.yaml";

/// YamlCompatibilityTableLoader adapter for YAML compatibility tables
///
/// Expected shape:
///
/// ```yaml
/// MIT:
///   Apache-2.0:
///     status: compatible
///   GPL-3.0:
///     status: incompatible
///     reason: copyleft conflict
/// ```
///
/// Any string is accepted as a license key; nothing is checked against SPDX.
pub struct YamlCompatibilityTableLoader {
    reader: FileSystemReader,
}

impl YamlCompatibilityTableLoader {
    pub fn new() -> Self {
        Self {
            reader: FileSystemReader::new(),
        }
    }

    /// Parses a table from YAML source
    pub fn parse(content: &str) -> std::result::Result<CompatibilityTable, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }
}

impl Default for YamlCompatibilityTableLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatibilityTableLoader for YamlCompatibilityTableLoader {
    fn load(&self, path: &Path) -> Result<CompatibilityTable> {
        let table_error = |details: String| LicenseReportError::CompatibilityTableError {
            path: path.to_path_buf(),
            details,
        };

        let content = self
            .reader
            .safe_read_file(path, "compatibility table")
            .map_err(|e| table_error(e.to_string()))?;

        let table = Self::parse(&content).map_err(|e| table_error(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            main_licenses = table.main_licenses().count(),
            pairs = table.pair_count(),
            "compatibility table loaded"
        );
        Ok(table)
    }
}
