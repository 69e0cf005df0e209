use super::{Coordinate, DependencyEdge};

/// Where to fetch a file and the SHA-1 it must hash to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadInfo {
    pub url: String,
    pub sha1: String,
}

impl DownloadInfo {
    pub fn new(url: impl Into<String>, sha1: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sha1: sha1.into(),
        }
    }
}

/// Present only when a floating version was pinned through remote metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    pub unresolved_version: String,
    pub repository_id: String,
    pub metadata: DownloadInfo,
}

/// Download data of an artifact whose descriptor came from a remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteArtifactInfo {
    pub authenticated: bool,
    pub download: DownloadInfo,
    pub relocations: Vec<DownloadInfo>,
}

/// One entry of the manifest's artifact list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Coordinate with the resolved version
    pub coordinate: Coordinate,
    /// Dependencies as declared by the descriptor, before any filtering
    pub dependencies: Vec<DependencyEdge>,
    pub snapshot: Option<SnapshotInfo>,
    pub remote: Option<RemoteArtifactInfo>,
}
