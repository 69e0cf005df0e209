/// Network adapters: repository transports
mod file_transporter;
mod http_transporter;
mod transporter_provider;

pub use file_transporter::FileTransporter;
pub use http_transporter::{HttpTransporter, DEFAULT_HTTP_TIMEOUT_SECS};
pub use transporter_provider::DefaultTransporterProvider;
