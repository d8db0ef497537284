//! Builder for constructing LicenseReportModel from domain objects

use super::component_view::{ComponentView, IssueView, LicenseGroupView};
use super::license_report_model::LicenseReportModel;
use crate::license_audit::domain::{GroupedComponents, IssueSet, LicenseId};
use chrono::Utc;

/// Builder for constructing LicenseReportModel from domain objects
pub struct LicenseReportModelBuilder;

impl LicenseReportModelBuilder {
    /// Builds the render payload
    ///
    /// # Arguments
    /// * `grouped` - Components grouped by effective license
    /// * `main_license` - Project license, if declared
    /// * `issues` - Audit result; `None` when validation was not requested
    pub fn build(
        grouped: &GroupedComponents,
        main_license: Option<&LicenseId>,
        issues: Option<&IssueSet>,
    ) -> LicenseReportModel {
        Self::build_at(grouped, main_license, issues, Utc::now().to_rfc3339())
    }

    fn build_at(
        grouped: &GroupedComponents,
        main_license: Option<&LicenseId>,
        issues: Option<&IssueSet>,
        generated_at: String,
    ) -> LicenseReportModel {
        let sorted_keys = grouped
            .sorted_keys()
            .into_iter()
            .map(|key| key.to_string())
            .collect();

        let groups: Vec<LicenseGroupView> = grouped
            .iter()
            .map(|(license, components)| LicenseGroupView {
                license: license.to_string(),
                components: components.iter().map(ComponentView::from).collect(),
            })
            .collect();

        let components_by_license = groups
            .iter()
            .map(|group| (group.license.clone(), group.components.clone()))
            .collect();

        LicenseReportModel {
            sorted_keys,
            components_by_license,
            groups,
            main_license: main_license.map(|license| license.to_string()),
            validated: issues.is_some(),
            issues: issues
                .map(|set| set.iter().map(IssueView::from).collect())
                .unwrap_or_default(),
            component_count: grouped.component_count(),
            generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_audit::domain::{Component, Issue, IssueStatus};
    use crate::license_audit::services::ComponentGrouper;

    fn grouped() -> GroupedComponents {
        ComponentGrouper::group(vec![
            Component::new("serde", "1.0.200", vec!["MIT".into(), "Apache-2.0".into()]),
            Component::new("bare", "0.1.0", vec![]),
            Component::new("anyhow", "1.0.86", vec!["MIT".into()]),
            Component::new("ring", "0.17.8", vec!["ISC".into()]),
        ])
    }

    #[test]
    fn test_build_sorted_keys_and_groups() {
        let model = LicenseReportModelBuilder::build(&grouped(), None, None);

        assert_eq!(model.sorted_keys, vec!["ISC", "MIT", "No License"]);
        let mit: Vec<&str> = model.components_by_license["MIT"]
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(mit, vec!["serde", "anyhow"]);
        assert_eq!(model.component_count, 4);
    }

    #[test]
    fn test_build_groups_follow_sorted_keys() {
        let model = LicenseReportModelBuilder::build(&grouped(), None, None);

        let licenses: Vec<&str> = model.groups.iter().map(|g| g.license.as_str()).collect();
        assert_eq!(licenses, model.sorted_keys);
        assert_eq!(model.groups[1].components.len(), 2);
    }

    #[test]
    fn test_build_component_view_licenses() {
        let model = LicenseReportModelBuilder::build(&grouped(), None, None);

        let serde = &model.components_by_license["MIT"][0];
        assert_eq!(serde.license, "MIT");
        assert_eq!(serde.licenses, vec!["MIT", "Apache-2.0"]);
        let bare = &model.components_by_license["No License"][0];
        assert_eq!(bare.license, "No License");
        assert!(bare.licenses.is_empty());
    }

    #[test]
    fn test_build_without_audit() {
        let model = LicenseReportModelBuilder::build(&grouped(), None, None);

        assert!(!model.validated);
        assert!(model.issues.is_empty());
        assert!(model.main_license.is_none());
    }

    #[test]
    fn test_build_with_audit() {
        let mut issues = IssueSet::new();
        issues.record(Issue::lookup_error("ISC".into()));
        issues.record(Issue::new("No License".into(), IssueStatus::Warning, "undeclared"));

        let main = LicenseId::from("MIT");
        let model = LicenseReportModelBuilder::build_at(
            &grouped(),
            Some(&main),
            Some(&issues),
            "2024-01-01T00:00:00+00:00".to_string(),
        );

        assert!(model.validated);
        assert_eq!(model.main_license.as_deref(), Some("MIT"));
        assert_eq!(model.issues.len(), 2);
        assert_eq!(model.issues[0].license, "ISC");
        assert_eq!(model.issues[0].status, "lookup-error");
        assert_eq!(model.issues[1].status, "warning");
        assert_eq!(model.generated_at, "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_build_generated_at_is_rfc3339() {
        let model = LicenseReportModelBuilder::build(&grouped(), None, None);
        assert!(model.generated_at.contains('T'));
    }
}
