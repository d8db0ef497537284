/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod input_format;
mod report_request;
mod report_response;

pub use input_format::InputFormat;
pub use report_request::ReportRequest;
pub use report_response::{AuditResult, ReportResponse};
