use crate::closure_resolution::domain::ProjectModel;
use crate::shared::Result;
use std::path::Path;

/// ProjectReader port for loading the project description
///
/// This port abstracts where the project's modules, parent chain, plugins,
/// dependencies and repositories come from.
pub trait ProjectReader {
    /// Reads the project description from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    ///
    /// # Returns
    /// The parsed project model with modules in build order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project description does not exist
    /// - The file cannot be read or parsed
    /// - A coordinate, scope or exclusion in it is malformed
    fn read_project(&self, project_path: &Path) -> Result<ProjectModel>;
}
