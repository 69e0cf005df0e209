/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
pub(crate) mod yaml_model;

pub use file_reader::{FileSystemReader, PROJECT_FILE_NAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
