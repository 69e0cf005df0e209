use crate::closure_resolution::domain::ManifestTree;
use crate::shared::Result;

/// ManifestFormatter port for rendering the manifest
pub trait ManifestFormatter {
    /// Renders the manifest tree
    ///
    /// # Arguments
    /// * `manifest` - The project node and the resolved artifacts in emission order
    ///
    /// # Returns
    /// Formatted manifest content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, manifest: &ManifestTree) -> Result<String>;
}
