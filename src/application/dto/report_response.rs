use crate::license_audit::domain::{GroupedComponents, IssueSet, LicenseId, RunOutcome};

/// Result of the compatibility audit stage
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub main_license: LicenseId,
    pub issues: IssueSet,
}

impl AuditResult {
    pub fn outcome(&self) -> RunOutcome {
        self.issues.outcome()
    }
}

/// ReportResponse - Internal response DTO from the license report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Rendered report, ready for an OutputPresenter
    pub rendered: String,
    /// Components grouped by effective license
    pub grouped: GroupedComponents,
    /// Audit result; `None` when validation was not requested
    pub audit: Option<AuditResult>,
}

impl ReportResponse {
    /// True when validation ran and flagged at least one license
    pub fn has_license_issues(&self) -> bool {
        self.audit
            .as_ref()
            .map(|audit| audit.outcome() == RunOutcome::Flagged)
            .unwrap_or(false)
    }
}
