/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the application core
/// needs from the outside world: reading files, decoding SBOMs, loading the
/// compatibility table, rendering and presenting the report.
pub mod outbound;
