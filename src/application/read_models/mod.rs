//! Read models for the rendered report
//!
//! View-optimized structs that give templates a denormalized,
//! serializable picture of the grouped components and audit result.

pub mod component_view;
pub mod license_report_model;
pub mod license_report_model_builder;

pub use component_view::{ComponentView, IssueView, LicenseGroupView};
pub use license_report_model::LicenseReportModel;
pub use license_report_model_builder::LicenseReportModelBuilder;
