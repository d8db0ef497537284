/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, template engine).
pub mod compatibility_table_loader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_renderer;
pub mod sbom_decoder;
pub mod sbom_reader;

pub use compatibility_table_loader::CompatibilityTableLoader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_renderer::ReportRenderer;
pub use sbom_decoder::{DecodeError, SbomDecoder};
pub use sbom_reader::{SbomReader, TemplateReader};
