use crate::shared::Result;

/// OutputPresenter port for presenting the rendered manifest
///
/// This port abstracts the output destination (stdout or a file).
pub trait OutputPresenter {
    /// Writes the rendered manifest to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered manifest
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination is a symbolic link
    /// - The destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
