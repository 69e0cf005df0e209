use crate::closure_resolution::domain::RemoteRepository;
use crate::ports::outbound::Transporter;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

pub const FILE_SCHEME: &str = "file:";

/// FileTransporter adapter reading repository files from a `file:` URL
///
/// Used for repositories mirrored on disk and in tests.
pub struct FileTransporter {
    root: PathBuf,
}

impl FileTransporter {
    pub fn new(repository: &RemoteRepository) -> Result<Self> {
        let path = repository
            .url
            .strip_prefix(FILE_SCHEME)
            .ok_or_else(|| anyhow::anyhow!("'{}' is not a file: URL", repository.url))?;

        // file:///abs and file:/abs both name /abs
        let path = match path.strip_prefix("//") {
            Some(rest) => rest,
            None => path,
        };
        let path = urlencoding::decode(path)?;

        Ok(Self {
            root: PathBuf::from(path.as_ref()),
        })
    }
}

impl Transporter for FileTransporter {
    fn get(&self, location: &str) -> Result<Vec<u8>> {
        let relative = urlencoding::decode(location.trim_start_matches('/'))?;
        let path = self.root.join(relative.as_ref());

        fs::read(&path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    }
}
