use crate::closure_resolution::domain::{
    Coordinate, DependencyEdge, DownloadInfo, ManifestTree, ResolvedArtifact,
};
use crate::ports::outbound::ManifestFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Exclusions match every classifier and extension
const WILDCARD: &str = "*";

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    project: ProjectEntry<'a>,
    dependencies: Vec<ArtifactEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ProjectEntry<'a> {
    #[serde(flatten)]
    artifact: ArtifactFields<'a>,
    dependencies: Vec<DependencyEntry<'a>>,
}

/// Field order matters: consumers diff manifests textually
#[derive(Debug, Serialize)]
struct ArtifactFields<'a> {
    #[serde(rename = "artifactId")]
    artifact_id: &'a str,
    #[serde(rename = "groupId")]
    group_id: &'a str,
    version: &'a str,
    classifier: &'a str,
    extension: &'a str,
}

impl<'a> From<&'a Coordinate> for ArtifactFields<'a> {
    fn from(coordinate: &'a Coordinate) -> Self {
        Self {
            artifact_id: coordinate.artifact_id(),
            group_id: coordinate.group_id(),
            version: coordinate.version(),
            classifier: coordinate.classifier(),
            extension: coordinate.extension(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DependencyEntry<'a> {
    #[serde(flatten)]
    artifact: ArtifactFields<'a>,
    scope: &'a str,
    optional: bool,
    exclusions: Vec<ExclusionEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ExclusionEntry<'a> {
    #[serde(rename = "artifactId")]
    artifact_id: &'a str,
    classifier: &'a str,
    extension: &'a str,
    #[serde(rename = "groupId")]
    group_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ArtifactEntry<'a> {
    #[serde(flatten)]
    artifact: ArtifactFields<'a>,
    dependencies: Vec<DependencyEntry<'a>>,
    #[serde(rename = "unresolved-version", skip_serializing_if = "Option::is_none")]
    unresolved_version: Option<&'a str>,
    #[serde(rename = "repository-id", skip_serializing_if = "Option::is_none")]
    repository_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Download<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authenticated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha1: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relocations: Option<Vec<Download<'a>>>,
}

#[derive(Debug, Serialize)]
struct Download<'a> {
    url: &'a str,
    sha1: &'a str,
}

impl<'a> From<&'a DownloadInfo> for Download<'a> {
    fn from(info: &'a DownloadInfo) -> Self {
        Self {
            url: &info.url,
            sha1: &info.sha1,
        }
    }
}

/// JsonManifestFormatter adapter rendering the manifest as pretty-printed JSON
///
/// Output shape:
/// `{ "project": {..., "dependencies": [seed edges]}, "dependencies": [resolved artifacts] }`.
/// Dependency entries are one level deep; they never nest their own
/// dependencies.
pub struct JsonManifestFormatter;

impl JsonManifestFormatter {
    pub fn new() -> Self {
        Self
    }

    fn dependency_entry(edge: &DependencyEdge) -> DependencyEntry<'_> {
        DependencyEntry {
            artifact: edge.coordinate().into(),
            scope: edge.scope().as_str(),
            optional: edge.is_optional(),
            exclusions: edge
                .exclusions()
                .iter()
                .map(|exclusion| ExclusionEntry {
                    artifact_id: exclusion.artifact_id(),
                    classifier: WILDCARD,
                    extension: WILDCARD,
                    group_id: exclusion.group_id(),
                })
                .collect(),
        }
    }

    fn artifact_entry(artifact: &ResolvedArtifact) -> ArtifactEntry<'_> {
        let snapshot = artifact.snapshot.as_ref();
        let remote = artifact.remote.as_ref();

        ArtifactEntry {
            artifact: (&artifact.coordinate).into(),
            dependencies: artifact
                .dependencies
                .iter()
                .map(Self::dependency_entry)
                .collect(),
            unresolved_version: snapshot.map(|s| s.unresolved_version.as_str()),
            repository_id: snapshot.map(|s| s.repository_id.as_str()),
            metadata: snapshot.map(|s| (&s.metadata).into()),
            authenticated: remote.map(|r| r.authenticated),
            url: remote.map(|r| r.download.url.as_str()),
            sha1: remote.map(|r| r.download.sha1.as_str()),
            relocations: remote.map(|r| r.relocations.iter().map(Download::from).collect()),
        }
    }
}

impl Default for JsonManifestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for JsonManifestFormatter {
    fn format(&self, manifest: &ManifestTree) -> Result<String> {
        let document = Manifest {
            project: ProjectEntry {
                artifact: (&manifest.project.coordinate).into(),
                dependencies: manifest
                    .project
                    .dependencies
                    .iter()
                    .map(Self::dependency_entry)
                    .collect(),
            },
            dependencies: manifest
                .artifacts
                .iter()
                .map(Self::artifact_entry)
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
