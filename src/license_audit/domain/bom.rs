use super::{Component, LicenseId};
use crate::license_audit::policies::PrimaryLicensePolicy;

/// Bom aggregate: the decoded SBOM, independent of its serialized form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bom {
    metadata_component: Option<Component>,
    components: Vec<Component>,
}

impl Bom {
    pub fn new(metadata_component: Option<Component>, components: Vec<Component>) -> Self {
        Self {
            metadata_component,
            components,
        }
    }

    /// The component describing the project itself (`metadata.component`)
    pub fn metadata_component(&self) -> Option<&Component> {
        self.metadata_component.as_ref()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// The project's own license, or `None` when the metadata component is
    /// missing or declares no license
    pub fn main_license(&self) -> Option<LicenseId> {
        self.metadata_component
            .as_ref()
            .and_then(|component| PrimaryLicensePolicy::declared_license(component.licenses()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_license_from_metadata_component() {
        let project = Component::new(
            "my-app",
            "1.0.0",
            vec![LicenseId::from("MIT"), LicenseId::from("Apache-2.0")],
        );
        let bom = Bom::new(Some(project), vec![]);
        assert_eq!(bom.main_license(), Some(LicenseId::from("MIT")));
    }

    #[test]
    fn test_main_license_undeclared() {
        let project = Component::new("my-app", "1.0.0", vec![]);
        let bom = Bom::new(Some(project), vec![]);
        assert_eq!(bom.main_license(), None);
    }

    #[test]
    fn test_main_license_without_metadata_component() {
        assert_eq!(Bom::default().main_license(), None);
    }
}
