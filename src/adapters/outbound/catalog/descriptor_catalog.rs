use crate::adapters::outbound::filesystem::yaml_model::{to_edges, DependencyEntry};
use crate::closure_resolution::domain::{Coordinate, DependencyEdge, Repository};
use crate::ports::outbound::{
    ArtifactDescriptor, ArtifactDescriptorReader, VersionResolution, VersionResolver,
};
use crate::shared::error::Mvn2NixError;
use crate::shared::security::read_validated_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Default file name of the catalog, looked up in the project directory
pub const CATALOG_FILE_NAME: &str = "mvn2nix.descriptors.yml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    artifacts: BTreeMap<String, ArtifactEntry>,
    #[serde(default)]
    versions: BTreeMap<String, VersionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArtifactEntry {
    repository: Option<String>,
    parent: Option<String>,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
    #[serde(default)]
    relocations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionEntry {
    version: String,
    repository: Option<String>,
}

/// Descriptors describe every file of a g:a:v, whatever its extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CatalogKey {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl CatalogKey {
    fn of(coordinate: &Coordinate) -> Self {
        Self {
            group_id: coordinate.group_id().to_string(),
            artifact_id: coordinate.artifact_id().to_string(),
            version: coordinate.version().to_string(),
        }
    }

    fn parse(key: &str) -> Result<Self> {
        Ok(Self::of(&key.parse::<Coordinate>()?))
    }
}

#[derive(Debug, Clone)]
struct CatalogDescriptor {
    repository: Option<String>,
    dependencies: Vec<DependencyEdge>,
    relocations: Vec<Coordinate>,
}

#[derive(Debug, Clone)]
struct CatalogVersion {
    version: String,
    repository: Option<String>,
}

/// DescriptorCatalog adapter: an offline descriptor and version source
///
/// Implements both the ArtifactDescriptorReader and VersionResolver ports
/// from a YAML catalog:
///
/// ```yaml
/// artifacts:
///   "org.slf4j:slf4j-api:2.0.9":
///     repository: central
///     parent: "org.slf4j:slf4j-parent:2.0.9"
///     dependencies:
///       - artifact: "org.slf4j:slf4j-simple:2.0.9"
///         scope: test
/// versions:
///   "com.example:lib:1.0-SNAPSHOT":
///     version: "1.0-20230101.000000-3"
///     repository: snapshots
/// ```
///
/// A declared `parent` is reported as an extra compile dependency on the
/// parent POM, so parent chains end up in the closure.
#[derive(Debug, Clone, Default)]
pub struct DescriptorCatalog {
    descriptors: HashMap<CatalogKey, CatalogDescriptor>,
    versions: HashMap<CatalogKey, CatalogVersion>,
}

impl DescriptorCatalog {
    /// Loads a catalog file
    ///
    /// # Errors
    /// Returns an error if the file does not exist, fails the file checks,
    /// or is not a valid catalog
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Mvn2NixError::DescriptorCatalogNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = read_validated_file(path, "descriptor catalog")?;

        Self::from_yaml(&content).map_err(|e| {
            Mvn2NixError::DescriptorCatalogParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Parses a catalog from YAML (or JSON) text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml_ng::from_str(content)?;

        let mut descriptors = HashMap::new();
        for (key, entry) in &file.artifacts {
            let catalog_key = CatalogKey::parse(key)?;
            let descriptor = Self::to_descriptor(entry)
                .map_err(|e| anyhow::anyhow!("artifact '{}': {}", key, e))?;
            if descriptors.insert(catalog_key, descriptor).is_some() {
                anyhow::bail!("artifact '{}' is declared more than once", key);
            }
        }

        let mut versions = HashMap::new();
        for (key, entry) in &file.versions {
            let catalog_key = CatalogKey::parse(key)?;
            let version = CatalogVersion {
                version: entry.version.clone(),
                repository: entry.repository.clone(),
            };
            if versions.insert(catalog_key, version).is_some() {
                anyhow::bail!("version of '{}' is declared more than once", key);
            }
        }

        Ok(Self {
            descriptors,
            versions,
        })
    }

    pub fn artifact_count(&self) -> usize {
        self.descriptors.len()
    }

    fn to_descriptor(entry: &ArtifactEntry) -> Result<CatalogDescriptor> {
        let mut dependencies = to_edges(&entry.dependencies)?;

        if let Some(parent) = &entry.parent {
            let parent: Coordinate = parent.parse()?;
            dependencies.push(DependencyEdge::compile(parent.pom()));
        }

        let relocations = entry
            .relocations
            .iter()
            .map(|relocation| relocation.parse::<Coordinate>())
            .collect::<Result<Vec<_>>>()?;

        Ok(CatalogDescriptor {
            repository: entry.repository.clone(),
            dependencies,
            relocations,
        })
    }

    /// The named repository, or the first one when none is named
    fn select_repository(
        name: Option<&str>,
        repositories: &[Repository],
        coordinate: &Coordinate,
    ) -> Result<Repository> {
        let selected = match name {
            Some(id) => repositories.iter().find(|repository| repository.id() == id),
            None => repositories.first(),
        };

        selected.cloned().ok_or_else(|| match name {
            Some(id) => anyhow::anyhow!(
                "repository '{}' named for {} is not among the project repositories",
                id,
                coordinate
            ),
            None => anyhow::anyhow!("no repository to resolve {} from", coordinate),
        })
    }
}

impl ArtifactDescriptorReader for DescriptorCatalog {
    fn read_descriptor(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<ArtifactDescriptor> {
        let descriptor = self
            .descriptors
            .get(&CatalogKey::of(coordinate))
            .ok_or_else(|| anyhow::anyhow!("{} is not in the descriptor catalog", coordinate))?;

        let repository =
            Self::select_repository(descriptor.repository.as_deref(), repositories, coordinate)?;

        Ok(ArtifactDescriptor {
            dependencies: descriptor.dependencies.clone(),
            relocations: descriptor.relocations.clone(),
            repository,
        })
    }
}

impl VersionResolver for DescriptorCatalog {
    fn resolve_version(
        &self,
        coordinate: &Coordinate,
        repositories: &[Repository],
    ) -> Result<VersionResolution> {
        match self.versions.get(&CatalogKey::of(coordinate)) {
            Some(mapping) => Ok(VersionResolution {
                version: mapping.version.clone(),
                repository: Some(Self::select_repository(
                    mapping.repository.as_deref(),
                    repositories,
                    coordinate,
                )?),
            }),
            // An already timestamped build is concrete
            None if coordinate.base_version() != coordinate.version() => Ok(VersionResolution {
                version: coordinate.version().to_string(),
                repository: None,
            }),
            None => anyhow::bail!(
                "no version mapping for {} in the descriptor catalog",
                coordinate
            ),
        }
    }
}
