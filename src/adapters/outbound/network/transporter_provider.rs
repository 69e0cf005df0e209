use super::file_transporter::{FileTransporter, FILE_SCHEME};
use super::http_transporter::{HttpTransporter, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::closure_resolution::domain::RemoteRepository;
use crate::ports::outbound::{Transporter, TransporterProvider};
use crate::shared::Result;
use std::time::Duration;

/// DefaultTransporterProvider adapter choosing a transporter by URL scheme
pub struct DefaultTransporterProvider {
    timeout: Duration,
}

impl DefaultTransporterProvider {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DefaultTransporterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TransporterProvider for DefaultTransporterProvider {
    fn new_transporter(&self, repository: &RemoteRepository) -> Result<Box<dyn Transporter>> {
        let url = repository.url.to_ascii_lowercase();

        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(Box::new(HttpTransporter::new(repository, self.timeout)?))
        } else if url.starts_with(FILE_SCHEME) {
            Ok(Box::new(FileTransporter::new(repository)?))
        } else {
            anyhow::bail!(
                "No transporter for repository '{}': unsupported URL '{}'",
                repository.id,
                repository.url
            )
        }
    }
}
