pub mod bom;
pub mod compatibility;
pub mod component;
pub mod grouped_components;
pub mod issue;
pub mod license_id;

pub use bom::Bom;
pub use compatibility::{CompatibilityEntry, CompatibilityStatus, CompatibilityTable};
pub use component::Component;
pub use grouped_components::GroupedComponents;
pub use issue::{Issue, IssueSet, IssueStatus, RunOutcome};
pub use license_id::LicenseId;
