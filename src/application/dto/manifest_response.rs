use crate::closure_resolution::domain::ManifestTree;

/// ManifestResponse - Internal response DTO from the manifest generation use case
///
/// Holds the manifest tree; formatting and presentation are left to the
/// caller.
#[derive(Debug, Clone)]
pub struct ManifestResponse {
    pub manifest: ManifestTree,
    /// Number of distinct repositories the closure was resolved against
    pub repository_count: usize,
}

impl ManifestResponse {
    pub fn new(manifest: ManifestTree, repository_count: usize) -> Self {
        Self {
            manifest,
            repository_count,
        }
    }
}
