//! sbom-licenses - license reports and compatibility checks for CycloneDX SBOMs
//!
//! This library reads a CycloneDX SBOM (JSON or XML), groups its components by
//! effective license, optionally audits every dependency license against the
//! project's own license using a YAML compatibility table, and renders a
//! report from a Tera template. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_audit`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_licenses::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemReader::new(),
//!     YamlCompatibilityTableLoader::new(),
//!     TeraReportRenderer::new(),
//!     StderrProgressReporter::new(),
//!     DecoderRegistry::with_defaults(),
//! );
//!
//! // Execute with validation against ./compatibility.yaml
//! let request = ReportRequest::new(PathBuf::from("sbom.json"), InputFormat::Json)
//!     .with_validation(PathBuf::from("compatibility.yaml"));
//! let response = use_case.execute(request)?;
//!
//! // Present output
//! FileSystemWriter::new(PathBuf::from("licenses.md")).present(&response.rendered)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::compatibility::YamlCompatibilityTableLoader;
    pub use crate::adapters::outbound::console::{IssueSummaryPrinter, StderrProgressReporter};
    pub use crate::adapters::outbound::decoders::{CycloneDxJsonDecoder, CycloneDxXmlDecoder};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::renderers::TeraReportRenderer;
    pub use crate::application::dto::{AuditResult, InputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::DecoderRegistry;
    pub use crate::application::read_models::{LicenseReportModel, LicenseReportModelBuilder};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::license_audit::domain::{
        Bom, CompatibilityEntry, CompatibilityStatus, CompatibilityTable, Component,
        GroupedComponents, Issue, IssueSet, IssueStatus, LicenseId, RunOutcome,
    };
    pub use crate::license_audit::policies::PrimaryLicensePolicy;
    pub use crate::license_audit::services::{
        CompatibilityAuditor, ComponentGrouper, LicenseResolver, ResolveError,
    };
    pub use crate::ports::outbound::{
        CompatibilityTableLoader, DecodeError, OutputPresenter, ProgressReporter, ReportRenderer,
        SbomDecoder, SbomReader, TemplateReader,
    };
    pub use crate::shared::error::{ExitCode, LicenseReportError};
    pub use crate::shared::Result;
}
