use super::yaml_model::{to_edges, to_repositories, DependencyEntry, RepositoryEntry};
use crate::closure_resolution::domain::{BuildPlugin, Coordinate, ProjectModel, ProjectModule};
use crate::ports::outbound::ProjectReader;
use crate::shared::error::Mvn2NixError;
use crate::shared::security::read_validated_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// File name of the project description inside the project directory
pub const PROJECT_FILE_NAME: &str = "mvn2nix.project.yml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectFile {
    modules: Vec<ModuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleEntry {
    artifact: String,
    #[serde(default)]
    parents: Vec<String>,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
    #[serde(default)]
    plugins: Vec<PluginEntry>,
    #[serde(default)]
    repositories: Vec<RepositoryEntry>,
    #[serde(default)]
    plugin_repositories: Vec<RepositoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginEntry {
    artifact: String,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
}

/// FileSystemReader adapter for reading the project description
///
/// This adapter implements the ProjectReader port, loading
/// `mvn2nix.project.yml` from the project directory.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_project(content: &str) -> Result<ProjectModel> {
        let file: ProjectFile = serde_yaml_ng::from_str(content)?;

        if file.modules.is_empty() {
            anyhow::bail!("the project declares no modules");
        }

        let modules = file
            .modules
            .iter()
            .map(Self::to_module)
            .collect::<Result<Vec<_>>>()?;

        Ok(ProjectModel::new(modules))
    }

    fn to_module(entry: &ModuleEntry) -> Result<ProjectModule> {
        let plugins = entry
            .plugins
            .iter()
            .map(|plugin| -> Result<BuildPlugin> {
                Ok(BuildPlugin {
                    artifact: plugin.artifact.parse()?,
                    dependencies: to_edges(&plugin.dependencies)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ProjectModule {
            artifact: entry.artifact.parse()?,
            parents: entry
                .parents
                .iter()
                .map(|parent| parent.parse::<Coordinate>())
                .collect::<Result<Vec<_>>>()?,
            dependencies: to_edges(&entry.dependencies)?,
            plugins,
            repositories: to_repositories(&entry.repositories)?,
            plugin_repositories: to_repositories(&entry.plugin_repositories)?,
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectReader for FileSystemReader {
    fn read_project(&self, project_path: &Path) -> Result<ProjectModel> {
        let project_file = project_path.join(PROJECT_FILE_NAME);

        if !project_file.exists() {
            return Err(Mvn2NixError::ProjectNotFound {
                path: project_file,
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Please run in the project root, or specify the correct path with the --path option.",
                    PROJECT_FILE_NAME,
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_validated_file(&project_file, "project description")?;

        Self::parse_project(&content).map_err(|e| {
            Mvn2NixError::ProjectParseError {
                path: project_file,
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure_resolution::domain::Scope;
    use std::fs;
    use tempfile::TempDir;

    const PROJECT: &str = r#"
modules:
  - artifact: com.example:core:1.0
    repositories:
      - id: central
        url: https://repo.maven.apache.org/maven2
  - artifact: com.example:app:1.0
    parents: [com.example:parent:1.0]
    dependencies:
      - artifact: com.example:core:1.0
      - artifact: junit:junit:4.13.2
        scope: test
    plugins:
      - artifact: org.apache.maven.plugins:maven-surefire-plugin:3.1.2
        dependencies:
          - artifact: org.apache.maven.surefire:surefire-junit4:3.1.2
    plugin_repositories:
      - id: plugins
        url: https://plugins.example.com/maven2
"#;

    #[test]
    fn test_read_project_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_FILE_NAME), PROJECT).unwrap();

        let reader = FileSystemReader::new();
        let project = reader.read_project(temp_dir.path()).unwrap();

        assert_eq!(project.modules.len(), 2);
        let app = project.root().unwrap();
        assert_eq!(app.artifact.to_string(), "com.example:app:jar:1.0");
        assert_eq!(app.parents.len(), 1);
        assert_eq!(app.dependencies[1].scope(), &Scope::Test);
        assert_eq!(app.plugins[0].dependencies.len(), 1);
        assert_eq!(app.plugin_repositories[0].id(), "plugins");
    }

    #[test]
    fn test_read_project_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_project(temp_dir.path());

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Project description not found"));
        assert!(err_msg.contains("--path"));
    }

    #[test]
    fn test_read_project_rejects_bad_coordinate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_FILE_NAME),
            "modules:\n  - artifact: not-a-coordinate\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let err_msg = reader.read_project(temp_dir.path()).unwrap_err().to_string();

        assert!(err_msg.contains("Failed to parse project description"));
        assert!(err_msg.contains("Invalid coordinate"));
    }

    #[test]
    fn test_read_project_rejects_empty_module_list() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_FILE_NAME), "modules: []\n").unwrap();

        let reader = FileSystemReader::new();
        let err_msg = reader.read_project(temp_dir.path()).unwrap_err().to_string();

        assert!(err_msg.contains("no modules"));
    }

    #[test]
    fn test_read_project_rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_FILE_NAME),
            "modules:\n  - artifact: g:a:1\n    dependancies: []\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        assert!(reader.read_project(temp_dir.path()).is_err());
    }
}
