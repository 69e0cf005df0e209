use crate::closure_resolution::domain::Authentication;
use crate::closure_resolution::services::TraversalOrder;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// ManifestRequest - Internal request DTO for the manifest generation use case
#[derive(Debug, Clone)]
pub struct ManifestRequest {
    /// Path to the project directory containing the project description
    pub project_path: PathBuf,
    /// Credentials keyed by repository id
    pub credentials: BTreeMap<String, Authentication>,
    /// End of the work set the closure engine takes edges from
    pub traversal_order: TraversalOrder,
}

impl ManifestRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            credentials: BTreeMap::new(),
            traversal_order: TraversalOrder::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: BTreeMap<String, Authentication>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_traversal_order(mut self, traversal_order: TraversalOrder) -> Self {
        self.traversal_order = traversal_order;
        self
    }
}
