use super::LicenseId;
use crate::license_audit::policies::PrimaryLicensePolicy;

/// Component entity representing one entry of the SBOM
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    version: String,
    licenses: Vec<LicenseId>,
}

impl Component {
    pub fn new(name: impl Into<String>, version: impl Into<String>, licenses: Vec<LicenseId>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            licenses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All declared licenses, in SBOM order
    pub fn licenses(&self) -> &[LicenseId] {
        &self.licenses
    }

    /// The single license representing this component
    pub fn effective_license(&self) -> LicenseId {
        PrimaryLicensePolicy::effective_license(&self.licenses)
    }
}
