use crate::closure_resolution::domain::{Coordinate, Repository};
use crate::ports::outbound::{ArtifactDescriptor, ArtifactDescriptorReader};
use crate::shared::Result;
use dashmap::DashMap;

/// Cache key: the coordinate and the ids of the repositories it was read against
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    coordinate: Coordinate,
    repository_ids: Vec<String>,
}

impl CacheKey {
    fn new(coordinate: &Coordinate, repositories: &[Repository]) -> Self {
        Self {
            coordinate: coordinate.clone(),
            repository_ids: repositories
                .iter()
                .map(|repository| repository.id().to_string())
                .collect(),
        }
    }
}

/// CachingDescriptorReader wraps an ArtifactDescriptorReader with an
/// in-memory cache.
///
/// The closure engine revisits a coordinate once per distinct edge reaching
/// it; only the first visit goes to the inner reader. Failures are not
/// cached.
pub struct CachingDescriptorReader<R: ArtifactDescriptorReader> {
    inner: R,
    cache: DashMap<CacheKey, ArtifactDescriptor>,
}

impl<R: ArtifactDescriptorReader> CachingDescriptorReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<R: ArtifactDescriptorReader> ArtifactDescriptorReader for CachingDescriptorReader<R> {
    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<ArtifactDescriptor> {
        let key = CacheKey::new(coordinate, repositories);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let descriptor = self.inner.read_descriptor(coordinate, repositories)?;
        self.cache.insert(key, descriptor.clone());

        Ok(descriptor)
    }
}
