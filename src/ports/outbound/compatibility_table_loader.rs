use crate::license_audit::domain::CompatibilityTable;
use crate::shared::Result;
use std::path::Path;

/// CompatibilityTableLoader port for loading the license compatibility table
pub trait CompatibilityTableLoader {
    /// Loads the table from `path`
    ///
    /// # Errors
    /// Returns `LicenseReportError::CompatibilityTableError` when the source
    /// cannot be read or is not a two-level mapping of entries
    fn load(&self, path: &Path) -> Result<CompatibilityTable>;
}
