use crate::adapters::outbound::decoders::{CycloneDxJsonDecoder, CycloneDxXmlDecoder};
use crate::ports::outbound::SbomDecoder;
use crate::shared::error::LicenseReportError;
use crate::shared::Result;

/// Registry of SBOM decoders keyed by format name
///
/// Adding a serialized form means registering one more decoder here; the use
/// case looks decoders up by name and never branches on the format.
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn SbomDecoder>>,
}

impl DecoderRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Creates a registry holding the CycloneDX JSON and XML decoders
    ///
    /// # Examples
    /// ```
    /// use sbom_licenses::application::factories::DecoderRegistry;
    ///
    /// let registry = DecoderRegistry::with_defaults();
    /// assert_eq!(registry.supported_formats(), vec!["json", "xml"]);
    /// ```
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CycloneDxJsonDecoder::new()));
        registry.register(Box::new(CycloneDxXmlDecoder::new()));
        registry
    }

    /// Registers a decoder, replacing any decoder with the same format name
    pub fn register(&mut self, decoder: Box<dyn SbomDecoder>) {
        self.decoders
            .retain(|existing| existing.format_name() != decoder.format_name());
        self.decoders.push(decoder);
    }

    /// Looks up the decoder for `format`
    ///
    /// # Errors
    /// `LicenseReportError::UnsupportedFormat` when no decoder is registered
    /// under that name
    pub fn get(&self, format: &str) -> Result<&dyn SbomDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.format_name() == format)
            .map(|decoder| decoder.as_ref())
            .ok_or_else(|| {
                LicenseReportError::UnsupportedFormat {
                    format: format.to_string(),
                    supported: self.supported_formats().join(", "),
                }
                .into()
            })
    }

    /// Names of all registered formats, in registration order
    pub fn supported_formats(&self) -> Vec<&'static str> {
        self.decoders
            .iter()
            .map(|decoder| decoder.format_name())
            .collect()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
