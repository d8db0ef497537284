use crate::license_audit::domain::Bom;
use thiserror::Error;

/// Why a document could not be decoded
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing to decode (empty or whitespace-only document)
    #[error("unknown structure or empty file")]
    Empty,
    /// Syntax error or unexpected document shape
    #[error("{0}")]
    Malformed(String),
}

/// SbomDecoder port: one serialized SBOM form -> domain `Bom`
///
/// Implementations are registered by format name so the use case never
/// branches on the input format itself.
pub trait SbomDecoder {
    /// Format name used for registry lookup (e.g. "json")
    fn format_name(&self) -> &'static str;

    /// Decodes the document
    fn decode(&self, content: &str) -> Result<Bom, DecodeError>;
}
