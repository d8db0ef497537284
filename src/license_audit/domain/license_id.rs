use serde::{Deserialize, Serialize};

/// Sentinel license used for components that declare no license at all
pub const NO_LICENSE: &str = "No License";

/// LicenseId value object
///
/// An opaque license identifier (SPDX id or free text). Equality is exact:
/// case and whitespace are preserved as supplied, nothing is normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseId(String);

impl LicenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The "No License" sentinel
    pub fn no_license() -> Self {
        Self(NO_LICENSE.to_string())
    }

    pub fn is_no_license(&self) -> bool {
        self.0 == NO_LICENSE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LicenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LicenseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LicenseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for LicenseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
