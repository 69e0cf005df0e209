use crate::application::dto::{ManifestRequest, ManifestResponse};
use crate::closure_resolution::domain::{
    Authentication, DependencyEdge, ManifestTree, ProjectModel, ProjectNode, Repository,
    ResolvedArtifact,
};
use crate::closure_resolution::services::{ClosureResolver, SeedCollector};
use crate::ports::outbound::{
    ArtifactDescriptorReader, ProgressReporter, ProjectReader, RepositoryLayoutProvider,
    TransporterProvider, VersionResolver,
};
use crate::shared::error::Mvn2NixError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashSet};

/// GenerateManifestUseCase - Core use case for manifest generation
///
/// This use case orchestrates the manifest generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `PRD` - ProjectReader implementation
/// * `DR` - ArtifactDescriptorReader implementation
/// * `VR` - VersionResolver implementation
/// * `LP` - RepositoryLayoutProvider implementation
/// * `TP` - TransporterProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateManifestUseCase<PRD, DR, VR, LP, TP, PR> {
    project_reader: PRD,
    descriptor_reader: DR,
    version_resolver: VR,
    layout_provider: LP,
    transporter_provider: TP,
    progress_reporter: PR,
}

impl<PRD, DR, VR, LP, TP, PR> GenerateManifestUseCase<PRD, DR, VR, LP, TP, PR>
where
    PRD: ProjectReader,
    DR: ArtifactDescriptorReader,
    VR: VersionResolver,
    LP: RepositoryLayoutProvider,
    TP: TransporterProvider,
    PR: ProgressReporter,
{
    /// Creates a new GenerateManifestUseCase with injected dependencies
    pub fn new(
        project_reader: PRD,
        descriptor_reader: DR,
        version_resolver: VR,
        layout_provider: LP,
        transporter_provider: TP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            project_reader,
            descriptor_reader,
            version_resolver,
            layout_provider,
            transporter_provider,
            progress_reporter,
        }
    }

    /// Executes the manifest generation use case
    ///
    /// # Arguments
    /// * `request` - Project path, repository credentials and traversal order
    ///
    /// # Returns
    /// ManifestResponse containing the project node and every resolved artifact
    ///
    /// # Errors
    /// Fails without a partial result if the project cannot be read or any
    /// artifact of the closure cannot be resolved
    pub fn execute(&self, request: ManifestRequest) -> Result<ManifestResponse> {
        // Step 1: Read the project description
        let project = self.read_and_report_project(&request)?;

        // Step 2: Collect seeds and repositories
        let seeds = Self::unique_seeds(SeedCollector::collect_seeds(&project));
        let repositories = self.apply_credentials(
            SeedCollector::collect_repositories(&project),
            &request.credentials,
        );

        // Step 3: Resolve the closure
        let artifacts = self.resolve_closure(&request, &seeds, &repositories)?;

        // Step 4: Build the manifest tree
        let root = project.root().ok_or_else(|| Mvn2NixError::Validation {
            message: "the project declares no modules".to_string(),
        })?;
        let manifest = ManifestTree::new(
            ProjectNode {
                coordinate: root.artifact.clone(),
                dependencies: seeds,
            },
            artifacts,
        );

        Ok(ManifestResponse::new(manifest, repositories.len()))
    }

    /// Reads the project description, reporting progress
    fn read_and_report_project(&self, request: &ManifestRequest) -> Result<ProjectModel> {
        self.progress_reporter.report(&format!(
            "📖 Loading project description from: {}",
            request.project_path.display()
        ));

        let project = self.project_reader.read_project(&request.project_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} module(s)", project.modules.len()));

        Ok(project)
    }

    /// Seeds in declaration order, each distinct edge once
    fn unique_seeds(seeds: Vec<DependencyEdge>) -> Vec<DependencyEdge> {
        let mut seen = HashSet::new();
        seeds
            .into_iter()
            .filter(|seed| seen.insert(seed.clone()))
            .collect()
    }

    /// Attaches configured credentials to remote repositories by id
    fn apply_credentials(
        &self,
        repositories: Vec<Repository>,
        credentials: &BTreeMap<String, Authentication>,
    ) -> Vec<Repository> {
        for id in credentials.keys() {
            let known_remote = repositories
                .iter()
                .any(|repository| repository.id() == id && repository.as_remote().is_some());
            if !known_remote {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Credentials configured for '{}', but the project has no remote repository with that id",
                    id
                ));
            }
        }

        repositories
            .into_iter()
            .map(|repository| match repository {
                Repository::Remote(remote) => match credentials.get(&remote.id) {
                    Some(auth) => Repository::Remote(remote.with_authentication(auth.clone())),
                    None => Repository::Remote(remote),
                },
                local => local,
            })
            .collect()
    }

    fn resolve_closure(
        &self,
        request: &ManifestRequest,
        seeds: &[DependencyEdge],
        repositories: &[Repository],
    ) -> Result<Vec<ResolvedArtifact>> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependency closure ({} seed(s), {} repositor{})...",
            seeds.len(),
            repositories.len(),
            if repositories.len() == 1 { "y" } else { "ies" }
        ));

        let resolver = ClosureResolver::new(
            &self.descriptor_reader,
            &self.version_resolver,
            &self.layout_provider,
            &self.transporter_provider,
        )
        .with_order(request.traversal_order);

        let result = resolver.resolve_with_progress(seeds, repositories, |processed, total, edge| {
            self.progress_reporter
                .report_progress(processed, total, Some(&edge.to_string()));
        });

        match result {
            Ok(artifacts) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Resolved {} artifact(s)",
                    artifacts.len()
                ));
                Ok(artifacts)
            }
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Dependency closure resolution failed");
                Err(e.into())
            }
        }
    }
}
