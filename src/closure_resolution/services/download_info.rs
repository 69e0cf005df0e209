use crate::closure_resolution::domain::{
    ArtifactMetadata, Coordinate, DownloadInfo, RemoteRepository, ResolutionError,
    ResolutionResult,
};
use crate::ports::outbound::{
    RepositoryLayout, RepositoryLayoutProvider, Transporter, TransporterProvider,
};

/// Length of a hex-encoded SHA-1 digest
const SHA1_HEX_LENGTH: usize = 40;

/// Joins a repository base URL and a relative path with exactly one `/`.
///
/// Trailing slashes of `base` and leading slashes of `path` are collapsed.
/// This is plain concatenation, not URI reference resolution: a base
/// without a trailing slash keeps its last segment.
pub fn build_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Computes download URLs and SHA-1 checksums of artifacts and metadata
/// through the repository layout and transport ports.
pub struct DownloadInfoResolver<'a> {
    layouts: &'a dyn RepositoryLayoutProvider,
    transports: &'a dyn TransporterProvider,
}

impl<'a> DownloadInfoResolver<'a> {
    pub fn new(
        layouts: &'a dyn RepositoryLayoutProvider,
        transports: &'a dyn TransporterProvider,
    ) -> Self {
        Self {
            layouts,
            transports,
        }
    }

    /// Opens a session on `repository` for work on `target`.
    ///
    /// The session holds the transporter; dropping it releases the
    /// transporter whether the downloads succeeded or not.
    pub fn open<'r>(
        &self,
        repository: &'r RemoteRepository,
        target: &str,
    ) -> ResolutionResult<RepositorySession<'r>> {
        let layout = self
            .layouts
            .new_repository_layout(repository)
            .map_err(|source| ResolutionError::Layout {
                repository: repository.id.clone(),
                target: target.to_string(),
                source,
            })?;

        let transporter = self
            .transports
            .new_transporter(repository)
            .map_err(|source| ResolutionError::Transport {
                repository: repository.id.clone(),
                target: target.to_string(),
                source,
            })?;

        Ok(RepositorySession {
            repository,
            layout,
            transporter,
        })
    }
}

/// Layout and transporter of one repository, scoped to one artifact
pub struct RepositorySession<'r> {
    repository: &'r RemoteRepository,
    layout: Box<dyn RepositoryLayout>,
    transporter: Box<dyn Transporter>,
}

impl RepositorySession<'_> {
    pub fn artifact(&self, coordinate: &Coordinate) -> ResolutionResult<DownloadInfo> {
        let location = self.layout.artifact_location(coordinate);
        self.download_info(&location, &coordinate.to_string())
    }

    pub fn metadata(&self, metadata: &ArtifactMetadata) -> ResolutionResult<DownloadInfo> {
        let location = self.layout.metadata_location(metadata);
        self.download_info(&location, &metadata.to_string())
    }

    fn download_info(&self, location: &str, target: &str) -> ResolutionResult<DownloadInfo> {
        let checksum = self
            .layout
            .checksums(location)
            .into_iter()
            .find(|checksum| checksum.is_sha1())
            .ok_or_else(|| ResolutionError::ChecksumMissing {
                repository: self.repository.id.clone(),
                target: target.to_string(),
            })?;

        let sha1 = self
            .transporter
            .get(&checksum.location)
            .and_then(|bytes| parse_sha1(&bytes))
            .map_err(|source| ResolutionError::Transport {
                repository: self.repository.id.clone(),
                target: target.to_string(),
                source,
            })?;

        Ok(DownloadInfo::new(build_url(&self.repository.url, location), sha1))
    }
}

/// Extracts the digest from a `.sha1` file.
///
/// Only the first 40 bytes count; checksum files often carry a trailing
/// newline or the file name after the digest.
fn parse_sha1(bytes: &[u8]) -> anyhow::Result<String> {
    if bytes.len() < SHA1_HEX_LENGTH {
        anyhow::bail!(
            "checksum file is {} bytes long, expected at least {}",
            bytes.len(),
            SHA1_HEX_LENGTH
        );
    }

    let digest = std::str::from_utf8(&bytes[..SHA1_HEX_LENGTH])
        .map_err(|e| anyhow::anyhow!("checksum is not valid UTF-8: {}", e))?;

    if !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("checksum '{}' is not a hex-encoded SHA-1", digest);
    }

    Ok(digest.to_ascii_lowercase())
}
