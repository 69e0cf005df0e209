use super::{Coordinate, DependencyEdge, ResolvedArtifact};

/// The project entry: its coordinate and every seed edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    pub coordinate: Coordinate,
    pub dependencies: Vec<DependencyEdge>,
}

/// Complete output of one run, artifacts in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestTree {
    pub project: ProjectNode,
    pub artifacts: Vec<ResolvedArtifact>,
}

impl ManifestTree {
    pub fn new(project: ProjectNode, artifacts: Vec<ResolvedArtifact>) -> Self {
        Self { project, artifacts }
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn find(&self, coordinate: &str) -> Option<&ResolvedArtifact> {
        self.artifacts
            .iter()
            .find(|artifact| artifact.coordinate.to_string() == coordinate)
    }
}
