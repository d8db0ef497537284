/// Compatibility table adapters
mod yaml_table_loader;

pub use yaml_table_loader::{YamlCompatibilityTableLoader, DEFAULT_TABLE_PATH};
