use crate::closure_resolution::domain::{ArtifactMetadata, Coordinate, RemoteRepository};
use crate::shared::Result;

pub const SHA1: &str = "SHA-1";
pub const MD5: &str = "MD5";

/// A checksum file advertised for some repository location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumLocation {
    /// Algorithm name, e.g. `SHA-1`
    pub algorithm: String,
    /// Path relative to the repository root
    pub location: String,
}

impl ChecksumLocation {
    pub fn is_sha1(&self) -> bool {
        self.algorithm.eq_ignore_ascii_case(SHA1)
    }
}

/// Maps artifacts and metadata to repository-relative paths
pub trait RepositoryLayout {
    /// Relative path of an artifact file
    fn artifact_location(&self, coordinate: &Coordinate) -> String;

    /// Relative path of a repository metadata file
    fn metadata_location(&self, metadata: &ArtifactMetadata) -> String;

    /// Checksum files published next to `location`
    fn checksums(&self, location: &str) -> Vec<ChecksumLocation>;
}

/// RepositoryLayoutProvider port for obtaining the layout of a repository
pub trait RepositoryLayoutProvider {
    /// Returns the layout for `repository`
    ///
    /// # Arguments
    /// * `repository` - Remote repository whose `layout` id selects the layout
    ///
    /// # Errors
    /// Returns an error if the layout id is not supported
    fn new_repository_layout(&self, repository: &RemoteRepository)
        -> Result<Box<dyn RepositoryLayout>>;
}
