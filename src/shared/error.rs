use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a license compliance failure
/// from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report written, and either validation was off or no issues were found
    Success = 0,
    /// Validation was requested and at least one license issue was found
    LicenseIssuesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable SBOM, malformed table, template failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LicenseIssuesDetected => write!(f, "License Issues Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license report generation.
///
/// Uses thiserror to derive Display and Error traits, keeping the
/// user-facing messages next to the variants they describe.
#[derive(Debug, Error)]
pub enum LicenseReportError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: Specify the SBOM location with the --input option")]
    SbomNotFound { path: PathBuf },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Check that --format matches the file contents (json or xml)")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Unknown structure or empty file: {path}\n\n💡 Hint: The SBOM must be a CycloneDX document with a top-level object (JSON) or <bom> element (XML)")]
    UnknownStructure { path: PathBuf },

    #[error("Unknown structure or empty components in sbom: {path}\n\n💡 Hint: The SBOM must list at least one component")]
    EmptyComponents { path: PathBuf },

    #[error("Unsupported input format: {format}\n\n💡 Hint: Supported formats are: {supported}")]
    UnsupportedFormat { format: String, supported: String },

    #[error("Failed to load compatibility table: {path}\nDetails: {details}\n\n💡 Hint: The table must be a YAML mapping of main license -> dependency license -> {{status, reason}}")]
    CompatibilityTableError { path: PathBuf, details: String },

    #[error("Project license undeclared: the SBOM metadata component lists no license\n\n💡 Hint: Add a license to metadata.component, or run without --validate")]
    ProjectLicenseUndeclared,

    #[error("Failed to render report template: {template}\nDetails: {details}\n\n💡 Hint: Templates use Tera syntax and receive `sorted_keys` and `components_by_license`")]
    TemplateError { template: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
