use mvn2nix::closure_resolution::domain::ProjectModel;
use mvn2nix::prelude::*;
use std::path::Path;

/// Mock ProjectReader returning a fixed project model
pub struct MockProjectReader {
    pub project: ProjectModel,
}

impl MockProjectReader {
    pub fn new(project: ProjectModel) -> Self {
        Self { project }
    }
}

impl ProjectReader for MockProjectReader {
    fn read_project(&self, _project_path: &Path) -> Result<ProjectModel> {
        Ok(self.project.clone())
    }
}
