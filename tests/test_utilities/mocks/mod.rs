/// Mock implementations for testing
mod mock_descriptor_reader;
mod mock_progress_reporter;
mod mock_project_reader;
mod mock_transporter_provider;
mod mock_version_resolver;

pub use mock_descriptor_reader::MockDescriptorReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_reader::MockProjectReader;
pub use mock_transporter_provider::{MockTransporterProvider, DEFAULT_SHA1};
pub use mock_version_resolver::MockVersionResolver;
