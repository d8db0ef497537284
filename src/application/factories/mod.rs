mod decoder_registry;

pub use decoder_registry::DecoderRegistry;
