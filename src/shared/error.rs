use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a failed resolution
/// from a malformed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the manifest was written
    Success = 0,
    /// Application error (resolution failure, I/O error, network error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for manifest generation.
///
/// Resolution failures inside the closure engine are reported through
/// [`crate::closure_resolution::domain::ResolutionError`]; this enum covers
/// everything around it (reading inputs, writing output).
#[derive(Debug, Error)]
pub enum Mvn2NixError {
    #[error("Project description not found: {path}\n\n💡 Hint: {suggestion}")]
    ProjectNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse project description: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the project description is valid YAML or JSON")]
    ProjectParseError { path: PathBuf, details: String },

    #[error("Descriptor catalog not found: {path}\n\n💡 Hint: Pass the catalog location with --descriptors or set 'descriptors' in the config file")]
    DescriptorCatalogNotFound { path: PathBuf },

    #[error("Failed to parse descriptor catalog: {path}\nDetails: {details}")]
    DescriptorCatalogParseError { path: PathBuf, details: String },

    #[error("Failed to write manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for domain values and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
