use crate::closure_resolution::domain::{Coordinate, DependencyEdge, Repository};
use crate::shared::Result;

/// What a descriptor source knows about one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Declared dependencies, unfiltered
    pub dependencies: Vec<DependencyEdge>,
    /// Coordinates this artifact was relocated from or to
    pub relocations: Vec<Coordinate>,
    /// Repository the descriptor was resolved from
    pub repository: Repository,
}

/// ArtifactDescriptorReader port for reading artifact descriptors
///
/// Implementations decide how descriptors are obtained; the closure engine
/// only consumes the declared dependencies, relocations and the resolving
/// repository.
pub trait ArtifactDescriptorReader {
    /// Reads the descriptor of `coordinate`
    ///
    /// # Arguments
    /// * `coordinate` - Artifact whose descriptor is requested (resolved version)
    /// * `repositories` - Repositories the descriptor may come from
    ///
    /// # Returns
    /// The artifact's descriptor
    ///
    /// # Errors
    /// Returns an error if the descriptor is unknown or cannot be obtained
    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<ArtifactDescriptor>;
}

impl<T: ArtifactDescriptorReader + ?Sized> ArtifactDescriptorReader for &T {
    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<ArtifactDescriptor> {
        (**self).read_descriptor(coordinate, repositories)
    }
}
