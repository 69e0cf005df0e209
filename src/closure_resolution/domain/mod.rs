pub mod coordinate;
pub mod dependency;
pub mod exclusion;
pub mod manifest;
pub mod project;
pub mod repository;
pub mod resolution_error;
pub mod resolved_artifact;

pub use coordinate::{ArtifactKey, ArtifactMetadata, Coordinate};
pub use dependency::{DependencyEdge, Scope};
pub use exclusion::Exclusion;
pub use manifest::{ManifestTree, ProjectNode};
pub use project::{BuildPlugin, ProjectModel, ProjectModule};
pub use repository::{Authentication, LocalRepository, RemoteRepository, Repository};
pub use resolution_error::{ResolutionError, ResolutionResult};
pub use resolved_artifact::{DownloadInfo, RemoteArtifactInfo, ResolvedArtifact, SnapshotInfo};
