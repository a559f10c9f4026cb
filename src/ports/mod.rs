/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the use case drives the filesystem,
/// the console, and the report formatters through these traits.
pub mod outbound;
