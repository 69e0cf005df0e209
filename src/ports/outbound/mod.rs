/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the closure engine and the
/// application use case need from the outside world: the project on disk,
/// descriptor and version sources, repository layouts, transports, the
/// manifest formatter and the console.
pub mod descriptor_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_reader;
pub mod repository_layout;
pub mod transport;
pub mod version_resolver;

pub use descriptor_reader::{ArtifactDescriptor, ArtifactDescriptorReader};
pub use formatter::ManifestFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_reader::ProjectReader;
pub use repository_layout::{ChecksumLocation, RepositoryLayout, RepositoryLayoutProvider};
pub use transport::{Transporter, TransporterProvider};
pub use version_resolver::{VersionResolution, VersionResolver};
