use crate::license_audit::domain::{Component, GroupedComponents};

/// ComponentGrouper service for grouping components by effective license
pub struct ComponentGrouper;

impl ComponentGrouper {
    /// Groups components by their effective license
    ///
    /// Components without a declared license land in the "No License" group.
    /// Order within each group follows input order. Never fails.
    pub fn group(components: impl IntoIterator<Item = Component>) -> GroupedComponents {
        let mut grouped = GroupedComponents::new();
        for component in components {
            let license = component.effective_license();
            grouped.push(license, component);
        }
        tracing::debug!(
            licenses = grouped.len(),
            components = grouped.component_count(),
            "grouped components by license"
        );
        grouped
    }
}
