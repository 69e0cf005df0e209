/// Formatter adapters for the manifest
mod json_formatter;

pub use json_formatter::JsonManifestFormatter;
