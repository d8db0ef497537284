use super::LicenseId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pre-declared judgement for a (main, dependency) license pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityStatus {
    Compatible,
    Incompatible,
    Warning,
}

impl std::fmt::Display for CompatibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityStatus::Compatible => write!(f, "compatible"),
            CompatibilityStatus::Incompatible => write!(f, "incompatible"),
            CompatibilityStatus::Warning => write!(f, "warning"),
        }
    }
}

/// One cell of the compatibility table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    pub status: CompatibilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CompatibilityEntry {
    pub fn new(status: CompatibilityStatus, reason: Option<String>) -> Self {
        Self { status, reason }
    }

    pub fn compatible() -> Self {
        Self::new(CompatibilityStatus::Compatible, None)
    }

    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self::new(CompatibilityStatus::Incompatible, Some(reason.into()))
    }

    pub fn warning(reason: impl Into<String>) -> Self {
        Self::new(CompatibilityStatus::Warning, Some(reason.into()))
    }
}

/// CompatibilityTable: main license -> dependency license -> entry
///
/// Directional (main -> dependency only) and read-only once built. The
/// serialized form is the bare two-level mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityTable {
    entries: BTreeMap<LicenseId, BTreeMap<LicenseId, CompatibilityEntry>>,
}

impl CompatibilityTable {
    pub fn new(entries: BTreeMap<LicenseId, BTreeMap<LicenseId, CompatibilityEntry>>) -> Self {
        Self { entries }
    }

    /// Sub-mapping declared for `main`, if any
    pub fn dependencies_of(&self, main: &LicenseId) -> Option<&BTreeMap<LicenseId, CompatibilityEntry>> {
        self.entries.get(main)
    }

    /// Main licenses declared in the table, sorted
    pub fn main_licenses(&self) -> impl Iterator<Item = &LicenseId> {
        self.entries.keys()
    }

    /// Number of declared (main, dependency) pairs
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(LicenseId, LicenseId, CompatibilityEntry)> for CompatibilityTable {
    fn from_iter<I: IntoIterator<Item = (LicenseId, LicenseId, CompatibilityEntry)>>(iter: I) -> Self {
        let mut entries: BTreeMap<LicenseId, BTreeMap<LicenseId, CompatibilityEntry>> =
            BTreeMap::new();
        for (main, dependency, entry) in iter {
            entries.entry(main).or_default().insert(dependency, entry);
        }
        Self { entries }
    }
}
