/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the closure engine is driven directly
/// by the application use case.
pub mod outbound;
