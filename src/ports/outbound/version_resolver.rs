use crate::closure_resolution::domain::{Coordinate, Repository};
use crate::shared::Result;

/// A concrete version and, when known, where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolution {
    pub version: String,
    pub repository: Option<Repository>,
}

/// VersionResolver port for pinning floating versions
pub trait VersionResolver {
    /// Resolves the version of `coordinate` to a concrete one
    ///
    /// # Arguments
    /// * `coordinate` - Artifact with a floating (snapshot) version
    /// * `repositories` - Repositories consulted for version metadata
    ///
    /// # Returns
    /// The concrete version; it may equal the requested one
    ///
    /// # Errors
    /// Returns an error if no concrete version can be determined
    fn resolve_version(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<VersionResolution>;
}

impl<T: VersionResolver + ?Sized> VersionResolver for &T {
    fn resolve_version(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<VersionResolution> {
        (**self).resolve_version(coordinate, repositories)
    }
}
