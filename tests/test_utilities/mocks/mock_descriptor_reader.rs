use mvn2nix::ports::outbound::ArtifactDescriptor;
use mvn2nix::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default, Clone)]
struct Entry {
    dependencies: Vec<DependencyEdge>,
    relocations: Vec<Coordinate>,
    repository: Option<String>,
}

/// Mock ArtifactDescriptorReader keyed by `groupId:artifactId:version`
///
/// Every file of a g:a:v shares one descriptor. Unknown artifacts fail.
#[derive(Default)]
pub struct MockDescriptorReader {
    entries: HashMap<String, Entry>,
    pub reads: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockDescriptorReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an artifact and its direct dependencies
    pub fn with_artifact(mut self, gav: &str, dependencies: Vec<DependencyEdge>) -> Self {
        self.entries.entry(gav.to_string()).or_default().dependencies = dependencies;
        self
    }

    pub fn with_relocation(mut self, gav: &str, relocation: &str) -> Self {
        self.entries
            .entry(gav.to_string())
            .or_default()
            .relocations
            .push(relocation.parse().unwrap());
        self
    }

    /// Serves the artifact from the repository with `id` instead of the first one
    pub fn with_repository(mut self, gav: &str, id: &str) -> Self {
        self.entries.entry(gav.to_string()).or_default().repository = Some(id.to_string());
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.borrow().len()
    }
}

fn gav(coordinate: &Coordinate) -> String {
    format!(
        "{}:{}:{}",
        coordinate.group_id(),
        coordinate.artifact_id(),
        coordinate.version()
    )
}

impl ArtifactDescriptorReader for MockDescriptorReader {
    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<ArtifactDescriptor> {
        let key = gav(coordinate);
        self.reads.borrow_mut().push(coordinate.to_string());

        let entry = self
            .entries
            .get(&key)
            .ok_or_else(|| anyhow::anyhow!("Mock descriptor missing for {}", key))?;

        let repository = match &entry.repository {
            Some(id) => repositories.iter().find(|repository| repository.id() == id),
            None => repositories.first(),
        }
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Mock has no repository for {}", key))?;

        Ok(ArtifactDescriptor {
            dependencies: entry.dependencies.clone(),
            relocations: entry.relocations.clone(),
            repository,
        })
    }
}
