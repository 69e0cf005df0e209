//! YAML shapes shared by the project description and the descriptor catalog

use crate::closure_resolution::domain::{
    Coordinate, DependencyEdge, Exclusion, LocalRepository, RemoteRepository, Repository, Scope,
};
use crate::shared::Result;
use serde::Deserialize;

/// A declared dependency: `artifact` is `g:a[:ext[:classifier]]:v`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DependencyEntry {
    pub artifact: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub optional: bool,
    /// `groupId:artifactId` patterns, `*` allowed
    #[serde(default)]
    pub exclusions: Vec<String>,
}

impl DependencyEntry {
    pub fn to_edge(&self) -> Result<DependencyEdge> {
        let coordinate: Coordinate = self.artifact.parse()?;
        let exclusions = self
            .exclusions
            .iter()
            .map(|exclusion| exclusion.parse::<Exclusion>())
            .collect::<Result<Vec<_>>>()?;

        Ok(DependencyEdge::new(
            coordinate,
            Scope::parse(&self.scope),
            self.optional,
            exclusions,
        ))
    }
}

/// A repository: `url` makes it remote, `path` makes it local
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RepositoryEntry {
    pub id: String,
    pub url: Option<String>,
    pub path: Option<String>,
    pub layout: Option<String>,
}

impl RepositoryEntry {
    pub fn to_repository(&self) -> Result<Repository> {
        if self.id.trim().is_empty() {
            anyhow::bail!("repository id must not be empty");
        }

        match (&self.url, &self.path) {
            (Some(url), None) => {
                let mut remote = RemoteRepository::new(self.id.as_str(), url.as_str());
                if let Some(layout) = &self.layout {
                    remote = remote.with_layout(layout.as_str());
                }
                Ok(Repository::Remote(remote))
            }
            (None, Some(path)) => Ok(Repository::Local(LocalRepository::new(
                self.id.as_str(),
                path.as_str(),
            ))),
            _ => anyhow::bail!(
                "repository '{}' must have exactly one of 'url' or 'path'",
                self.id
            ),
        }
    }
}

pub(crate) fn to_edges(entries: &[DependencyEntry]) -> Result<Vec<DependencyEdge>> {
    entries.iter().map(DependencyEntry::to_edge).collect()
}

pub(crate) fn to_repositories(entries: &[RepositoryEntry]) -> Result<Vec<Repository>> {
    entries.iter().map(RepositoryEntry::to_repository).collect()
}
