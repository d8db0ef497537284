use super::{LicenseResolver, ResolveError};
use crate::license_audit::domain::{
    CompatibilityTable, GroupedComponents, Issue, IssueSet, IssueStatus, LicenseId,
};

/// CompatibilityAuditor service for checking dependency licenses against the
/// project license
///
/// Each distinct effective license is resolved once, so any number of
/// components sharing a problematic license produce a single issue. Lookup
/// failures become `lookup-error` issues instead of aborting the audit.
pub struct CompatibilityAuditor;

impl CompatibilityAuditor {
    /// Audits every license group against `main_license`
    pub fn audit(
        table: &CompatibilityTable,
        main_license: &LicenseId,
        grouped: &GroupedComponents,
    ) -> IssueSet {
        Self::audit_with_progress(table, main_license, grouped, |_, _| {})
    }

    /// Same as [`audit`](Self::audit), calling `on_progress(done, total)` after
    /// each license is resolved
    pub fn audit_with_progress<F>(
        table: &CompatibilityTable,
        main_license: &LicenseId,
        grouped: &GroupedComponents,
        mut on_progress: F,
    ) -> IssueSet
    where
        F: FnMut(usize, usize),
    {
        let licenses = grouped.sorted_keys();
        let total = licenses.len();
        let mut issues = IssueSet::new();

        for (index, license) in licenses.into_iter().enumerate() {
            if let Some(issue) = Self::check_license(table, main_license, license) {
                tracing::debug!(
                    license = %license,
                    status = %issue.status(),
                    "license flagged"
                );
                issues.record(issue);
            }
            on_progress(index + 1, total);
        }

        issues
    }

    /// Classifies one dependency license; `None` means compatible
    fn check_license(
        table: &CompatibilityTable,
        main_license: &LicenseId,
        license: &LicenseId,
    ) -> Option<Issue> {
        match LicenseResolver::resolve(table, main_license, license) {
            Ok(entry) => IssueStatus::from_compatibility(entry.status).map(|status| {
                Issue::new(
                    license.clone(),
                    status,
                    entry.reason.clone().unwrap_or_default(),
                )
            }),
            Err(ResolveError::NotFound { .. }) => Some(Issue::lookup_error(license.clone())),
        }
    }
}
