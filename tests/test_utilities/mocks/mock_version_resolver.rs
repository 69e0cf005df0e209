use mvn2nix::ports::outbound::VersionResolution;
use mvn2nix::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock VersionResolver: mapped versions pin, failing ones error, everything
/// else resolves to itself
#[derive(Default)]
pub struct MockVersionResolver {
    mappings: HashMap<String, (String, Option<Repository>)>,
    failures: HashSet<String>,
}

#[allow(dead_code)]
impl MockVersionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, gav: &str, version: &str, repository: Repository) -> Self {
        self.mappings
            .insert(gav.to_string(), (version.to_string(), Some(repository)));
        self
    }

    /// Makes resolving `gav` fail
    pub fn with_failure(mut self, gav: &str) -> Self {
        self.failures.insert(gav.to_string());
        self
    }
}

impl VersionResolver for MockVersionResolver {
    fn resolve_version(
        &self,
        coordinate: &Coordinate,
        _repositories: &[Repository],
    ) -> Result<VersionResolution> {
        let key = format!(
            "{}:{}:{}",
            coordinate.group_id(),
            coordinate.artifact_id(),
            coordinate.version()
        );
        if self.failures.contains(&key) {
            anyhow::bail!("Mock has no metadata for {}", coordinate);
        }
        Ok(match self.mappings.get(&key) {
            Some((version, repository)) => VersionResolution {
                version: version.clone(),
                repository: repository.clone(),
            },
            None => VersionResolution {
                version: coordinate.version().to_string(),
                repository: None,
            },
        })
    }
}
