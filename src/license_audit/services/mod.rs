mod compatibility_auditor;
mod component_grouper;
mod license_resolver;

pub use compatibility_auditor::CompatibilityAuditor;
pub use component_grouper::ComponentGrouper;
pub use license_resolver::{LicenseResolver, ResolveError};
