use crate::closure_resolution::domain::RemoteRepository;
use crate::shared::Result;

/// Session on one repository
///
/// A transporter is released when dropped; callers scope it to the work
/// that needs it.
pub trait Transporter {
    /// Downloads the file at `location`, relative to the repository root
    ///
    /// # Errors
    /// Returns an error if the file is missing or the transfer fails
    fn get(&self, location: &str) -> Result<Vec<u8>>;
}

/// TransporterProvider port for opening repository sessions
pub trait TransporterProvider {
    /// Opens a transporter for `repository`
    ///
    /// # Errors
    /// Returns an error if the repository URL scheme is not supported or
    /// the client cannot be created
    fn new_transporter(&self, repository: &RemoteRepository) -> Result<Box<dyn Transporter>>;
}
