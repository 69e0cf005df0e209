use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_LAYOUT: &str = "default";

/// Artifact repository a descriptor or version can be resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repository {
    Remote(RemoteRepository),
    Local(LocalRepository),
}

impl Repository {
    pub fn id(&self) -> &str {
        match self {
            Repository::Remote(remote) => &remote.id,
            Repository::Local(local) => &local.id,
        }
    }

    pub fn as_remote(&self) -> Option<&RemoteRepository> {
        match self {
            Repository::Remote(remote) => Some(remote),
            Repository::Local(_) => None,
        }
    }
}

/// Repository reachable through a URL, laid out by `layout`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    pub id: String,
    pub url: String,
    pub layout: String,
    pub authentication: Option<Authentication>,
}

impl RemoteRepository {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            layout: DEFAULT_LAYOUT.to_string(),
            authentication: None,
        }
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }
}

/// Repository on the local filesystem; its artifacts have no download URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    pub id: String,
    pub path: PathBuf,
}

impl LocalRepository {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// Credentials attached to a remote repository
#[derive(Clone, PartialEq, Eq)]
pub struct Authentication {
    pub username: String,
    pub password: Option<String>,
}

impl Authentication {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

// Keep passwords out of logs and error chains.
impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
