use crate::license_audit::domain::LicenseId;

/// PrimaryLicensePolicy: take the first declared license
///
/// A component listing several licenses is represented by its first one, both
/// for grouping and for deriving the project license. Later licenses are kept
/// on the component for display but never audited.
///
/// Within a single CycloneDX license choice, the identifier is chosen by priority:
/// 1. `license.id` (SPDX identifier, if non-empty)
/// 2. `license.name` (free text, if non-empty)
/// 3. `expression` (kept verbatim, not parsed)
///
/// A choice with none of these still occupies its position, as the empty
/// identifier, so "first declared" always refers to the first choice in the SBOM.
pub struct PrimaryLicensePolicy;

impl PrimaryLicensePolicy {
    /// Effective license of a component; the "No License" sentinel when none is declared
    pub fn effective_license(licenses: &[LicenseId]) -> LicenseId {
        Self::declared_license(licenses).unwrap_or_else(LicenseId::no_license)
    }

    /// First declared license, if any
    pub fn declared_license(licenses: &[LicenseId]) -> Option<LicenseId> {
        licenses.first().cloned()
    }

    /// Picks the identifier of one license choice
    ///
    /// # Returns
    /// The selected identifier, or the empty identifier when the choice
    /// carries nothing usable
    pub fn select_identifier(
        id: Option<String>,
        name: Option<String>,
        expression: Option<String>,
    ) -> LicenseId {
        id.filter(|s| !s.is_empty())
            .or_else(|| name.filter(|s| !s.is_empty()))
            .or_else(|| expression.filter(|s| !s.is_empty()))
            .map(LicenseId::from)
            .unwrap_or_else(|| LicenseId::from(""))
    }
}
