use crate::closure_resolution::domain::{Authentication, RemoteRepository};
use crate::closure_resolution::services::build_url;
use crate::ports::outbound::Transporter;
use crate::shared::Result;
use std::time::Duration;

/// Default timeout for a single checksum download
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// HttpTransporter adapter downloading repository files over HTTP(S)
///
/// One blocking client per repository session. Requests carry basic auth
/// when the repository has credentials. No retries: a failed download
/// aborts the run.
pub struct HttpTransporter {
    client: reqwest::blocking::Client,
    base_url: String,
    authentication: Option<Authentication>,
}

impl HttpTransporter {
    pub fn new(repository: &RemoteRepository, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mvn2nix/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: repository.url.clone(),
            authentication: repository.authentication.clone(),
        })
    }
}

impl Transporter for HttpTransporter {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        let url = build_url(&self.base_url, location);

        let mut request = self.client.get(&url);
        if let Some(auth) = &self.authentication {
            request = request.basic_auth(&auth.username, auth.password.as_ref());
        }

        let response = request.send()?;

        if !response.status().is_success() {
            anyhow::bail!("GET {} returned status code {}", url, response.status());
        }

        Ok(response.bytes()?.to_vec())
    }
}
