/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod compatibility;
pub mod console;
pub mod decoders;
pub mod filesystem;
pub mod renderers;
