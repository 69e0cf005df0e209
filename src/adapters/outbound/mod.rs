/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod catalog;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod layout;
pub mod network;
