//! Component view structs for the license report read model
//!
//! These structs flatten domain data into the shape templates consume.

use crate::license_audit::domain::{Component, Issue};
use serde::Serialize;

/// View representation of a software component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentView {
    /// Component name
    pub name: String,
    /// Component version (empty when the SBOM omits it)
    pub version: String,
    /// Effective license (first declared, or "No License")
    pub license: String,
    /// Every declared license, in SBOM order
    pub licenses: Vec<String>,
}

impl From<&Component> for ComponentView {
    fn from(component: &Component) -> Self {
        Self {
            name: component.name().to_string(),
            version: component.version().to_string(),
            license: component.effective_license().to_string(),
            licenses: component
                .licenses()
                .iter()
                .map(|license| license.to_string())
                .collect(),
        }
    }
}

/// One report section: a license and the components declaring it first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseGroupView {
    pub license: String,
    pub components: Vec<ComponentView>,
}

/// View representation of a flagged license
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueView {
    pub license: String,
    /// "incompatible", "warning" or "lookup-error"
    pub status: String,
    pub reason: String,
}

impl From<&Issue> for IssueView {
    fn from(issue: &Issue) -> Self {
        Self {
            license: issue.license().to_string(),
            status: issue.status().to_string(),
            reason: issue.reason().to_string(),
        }
    }
}
