//! License report read model
//!
//! The payload handed to the template renderer.

use super::component_view::{ComponentView, IssueView, LicenseGroupView};
use serde::Serialize;
use std::collections::BTreeMap;

/// Render payload for the license report
///
/// `sorted_keys` and `components_by_license` are the two fields every
/// template relies on; the rest is optional context.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseReportModel {
    /// License keys, lexicographically sorted, without duplicates
    pub sorted_keys: Vec<String>,
    /// License key -> components in SBOM order
    pub components_by_license: BTreeMap<String, Vec<ComponentView>>,
    /// Same grouping as an ordered list, for templates that iterate groups directly
    pub groups: Vec<LicenseGroupView>,
    /// Project license, when the SBOM declares one
    pub main_license: Option<String>,
    /// Whether the compatibility audit ran
    pub validated: bool,
    /// Flagged licenses (empty when the audit did not run)
    pub issues: Vec<IssueView>,
    /// Total number of components in the report
    pub component_count: usize,
    /// RFC 3339 timestamp of report generation
    pub generated_at: String,
}
