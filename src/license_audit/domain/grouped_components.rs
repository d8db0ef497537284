use super::{Component, LicenseId};
use std::collections::BTreeMap;

/// GroupedComponents: effective license -> components sharing it
///
/// Keys are kept sorted (byte-wise lexicographic), which fixes the section
/// order of the rendered report. Within a group, components keep SBOM order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedComponents {
    groups: BTreeMap<LicenseId, Vec<Component>>,
}

impl GroupedComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component to the group for `license`, creating it on first use
    pub fn push(&mut self, license: LicenseId, component: Component) {
        self.groups.entry(license).or_default().push(component);
    }

    /// License keys, sorted and free of duplicates
    pub fn sorted_keys(&self) -> Vec<&LicenseId> {
        self.groups.keys().collect()
    }

    pub fn get(&self, license: &str) -> Option<&[Component]> {
        self.groups.get(license).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LicenseId, &[Component])> {
        self.groups
            .iter()
            .map(|(license, components)| (license, components.as_slice()))
    }

    /// Number of distinct licenses
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
