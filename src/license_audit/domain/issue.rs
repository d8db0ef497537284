use super::{CompatibilityStatus, LicenseId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Reason recorded when a license pair has no entry in the table
pub const LOOKUP_ERROR_REASON: &str = "License not found in compatibility matrix.";

/// Classification of a flagged dependency license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    Incompatible,
    Warning,
    /// The (main, dependency) pair is not declared in the table
    LookupError,
}

impl IssueStatus {
    /// Maps a table status to an issue status; compatible pairs are not issues
    pub fn from_compatibility(status: CompatibilityStatus) -> Option<Self> {
        match status {
            CompatibilityStatus::Compatible => None,
            CompatibilityStatus::Incompatible => Some(IssueStatus::Incompatible),
            CompatibilityStatus::Warning => Some(IssueStatus::Warning),
        }
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Incompatible => write!(f, "incompatible"),
            IssueStatus::Warning => write!(f, "warning"),
            IssueStatus::LookupError => write!(f, "lookup-error"),
        }
    }
}

/// Issue value object: one offending dependency license
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    license: LicenseId,
    status: IssueStatus,
    reason: String,
}

impl Issue {
    pub fn new(license: LicenseId, status: IssueStatus, reason: impl Into<String>) -> Self {
        Self {
            license,
            status,
            reason: reason.into(),
        }
    }

    pub fn lookup_error(license: LicenseId) -> Self {
        Self::new(license, IssueStatus::LookupError, LOOKUP_ERROR_REASON)
    }

    pub fn license(&self) -> &LicenseId {
        &self.license
    }

    pub fn status(&self) -> IssueStatus {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Issues of one audit pass, keyed by license identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueSet {
    issues: BTreeMap<LicenseId, Issue>,
}

impl IssueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue; a later issue for the same license replaces the earlier one
    pub fn record(&mut self, issue: Issue) {
        self.issues.insert(issue.license.clone(), issue);
    }

    pub fn get(&self, license: &str) -> Option<&Issue> {
        self.issues.get(license)
    }

    /// Issues in license order
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.values()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count_by_status(&self, status: IssueStatus) -> usize {
        self.iter().filter(|issue| issue.status == status).count()
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.is_empty() {
            RunOutcome::Clean
        } else {
            RunOutcome::Flagged
        }
    }
}

/// Terminal state of a validated run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Clean,
    Flagged,
}
