use sbom_licenses::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock CompatibilityTableLoader that counts how often it is asked to load
#[derive(Clone)]
pub struct MockCompatibilityTableLoader {
    table: Option<CompatibilityTable>,
    loads: Arc<AtomicUsize>,
}

impl MockCompatibilityTableLoader {
    pub fn new(table: CompatibilityTable) -> Self {
        Self {
            table: Some(table),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Builds the table from (main, dependency, entry) triples
    pub fn from_entries(entries: Vec<(&str, &str, CompatibilityEntry)>) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|(main, dependency, entry)| {
                    (LicenseId::from(main), LicenseId::from(dependency), entry)
                })
                .collect(),
        )
    }

    /// A loader whose table is always unreadable
    pub fn failing() -> Self {
        Self {
            table: None,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl CompatibilityTableLoader for MockCompatibilityTableLoader {
    fn load(&self, path: &Path) -> Result<CompatibilityTable> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.table.clone().ok_or_else(|| {
            LicenseReportError::CompatibilityTableError {
                path: path.to_path_buf(),
                details: "invalid type: sequence, expected a map".to_string(),
            }
            .into()
        })
    }
}
