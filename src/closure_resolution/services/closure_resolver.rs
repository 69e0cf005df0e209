use super::download_info::DownloadInfoResolver;
use crate::closure_resolution::domain::{
    ArtifactKey, ArtifactMetadata, Coordinate, DependencyEdge, DownloadInfo, RemoteArtifactInfo,
    RemoteRepository, Repository, ResolutionError, ResolutionResult, ResolvedArtifact,
    SnapshotInfo,
};
use crate::closure_resolution::policies::ScopePolicy;
use crate::ports::outbound::{
    ArtifactDescriptor, ArtifactDescriptorReader, RepositoryLayoutProvider, TransporterProvider,
    VersionResolver,
};
use std::collections::{BTreeSet, HashSet};

/// End of the ordered work set the next edge is taken from.
///
/// The manifest content does not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    #[default]
    Forward,
    Reverse,
}

/// ClosureResolver computes the transitive closure of a set of seed edges.
///
/// Worklist algorithm: an edge is taken from the ordered work set, skipped
/// if it was processed before, otherwise its version is pinned, its
/// descriptor is read, a manifest record is emitted the first time its
/// artifact key is seen, and its implicit POM edge plus the children kept
/// by [`ScopePolicy`] are put back into the work set.
///
/// Deduplication is two-level: the seen set holds whole edges (scope and
/// exclusions included) so an artifact reached under a new edge still has
/// its children traversed under that edge, while the printed set holds
/// artifact keys so each artifact is emitted once.
pub struct ClosureResolver<'a> {
    descriptors: &'a dyn ArtifactDescriptorReader,
    versions: &'a dyn VersionResolver,
    downloads: DownloadInfoResolver<'a>,
    order: TraversalOrder,
}

/// Per-run state; nothing outlives a single `resolve` call
struct ResolutionRun {
    work: BTreeSet<DependencyEdge>,
    seen: HashSet<DependencyEdge>,
    printed: HashSet<ArtifactKey>,
    artifacts: Vec<ResolvedArtifact>,
}

impl ResolutionRun {
    fn new(seeds: &[DependencyEdge]) -> Self {
        Self {
            work: seeds.iter().cloned().collect(),
            seen: HashSet::new(),
            printed: HashSet::new(),
            artifacts: Vec::new(),
        }
    }

    fn next(&mut self, order: TraversalOrder) -> Option<DependencyEdge> {
        match order {
            TraversalOrder::Forward => self.work.pop_first(),
            TraversalOrder::Reverse => self.work.pop_last(),
        }
    }
}

impl<'a> ClosureResolver<'a> {
    pub fn new(
        descriptors: &'a dyn ArtifactDescriptorReader,
        versions: &'a dyn VersionResolver,
        layouts: &'a dyn RepositoryLayoutProvider,
        transports: &'a dyn TransporterProvider,
    ) -> Self {
        Self {
            descriptors,
            versions,
            downloads: DownloadInfoResolver::new(layouts, transports),
            order: TraversalOrder::default(),
        }
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Resolves the closure of `seeds` against `repositories`
    ///
    /// # Returns
    /// Resolved artifacts in emission order
    ///
    /// # Errors
    /// The first descriptor, version, layout, checksum or transport failure
    /// aborts the run.
    pub fn resolve(
        &self,
        seeds: &[DependencyEdge],
        repositories: &[Repository],
    ) -> ResolutionResult<Vec<ResolvedArtifact>> {
        self.resolve_with_progress(seeds, repositories, |_, _, _| {})
    }

    /// Like [`ClosureResolver::resolve`], calling `on_progress` with
    /// `(processed, processed + pending, edge)` after every processed edge
    pub fn resolve_with_progress<F>(
        &self,
        seeds: &[DependencyEdge],
        repositories: &[Repository],
        mut on_progress: F,
    ) -> ResolutionResult<Vec<ResolvedArtifact>>
    where
        F: FnMut(usize, usize, &DependencyEdge),
    {
        let mut run = ResolutionRun::new(seeds);
        let mut processed = 0;

        while let Some(edge) = run.next(self.order) {
            if run.seen.contains(&edge) {
                continue;
            }
            run.seen.insert(edge.clone());

            self.process(&edge, repositories, &mut run)?;

            processed += 1;
            on_progress(processed, processed + run.work.len(), &edge);
        }

        Ok(run.artifacts)
    }

    fn process(
        &self,
        edge: &DependencyEdge,
        repositories: &[Repository],
        run: &mut ResolutionRun,
    ) -> ResolutionResult<()> {
        let requested = edge.coordinate();
        let (coordinate, metadata) = self.pin_version(requested, repositories)?;

        let descriptor = self
            .descriptors
            .read_descriptor(&coordinate, repositories)
            .map_err(|source| ResolutionError::DescriptorResolution {
                coordinate: coordinate.clone(),
                source,
            })?;

        if run.printed.insert(requested.key()) {
            let artifact = self.build_record(requested, coordinate, metadata, &descriptor)?;
            run.artifacts.push(artifact);
        }

        if !requested.is_pom() {
            run.work.insert(edge.implicit_pom());
        }

        run.work
            .extend(ScopePolicy::filter_children(edge, &descriptor.dependencies));

        Ok(())
    }

    /// Pins a floating version.
    ///
    /// Returns the coordinate to read the descriptor of and, when the version
    /// changed and came from a remote repository, the download info of the
    /// repository metadata that maps it.
    fn pin_version(
        &self,
        requested: &Coordinate,
        repositories: &[Repository],
    ) -> ResolutionResult<(Coordinate, Option<DownloadInfo>)> {
        if !requested.is_snapshot() {
            return Ok((requested.clone(), None));
        }

        let resolution = self
            .versions
            .resolve_version(requested, repositories)
            .map_err(|source| ResolutionError::VersionResolution {
                coordinate: requested.clone(),
                source,
            })?;

        if resolution.version == requested.version() {
            return Ok((requested.clone(), None));
        }

        let resolved = requested
            .with_version(resolution.version.as_str())
            .map_err(|source| ResolutionError::VersionResolution {
                coordinate: requested.clone(),
                source,
            })?;

        let metadata = match resolution.repository.as_ref().and_then(Repository::as_remote) {
            Some(remote) => {
                let metadata = ArtifactMetadata::for_snapshot(requested, requested.version());
                let session = self.downloads.open(remote, &metadata.to_string())?;
                Some(session.metadata(&metadata)?)
            }
            None => None,
        };

        Ok((resolved, metadata))
    }

    fn build_record(
        &self,
        requested: &Coordinate,
        coordinate: Coordinate,
        metadata: Option<DownloadInfo>,
        descriptor: &ArtifactDescriptor,
    ) -> ResolutionResult<ResolvedArtifact> {
        let snapshot = metadata.map(|metadata| SnapshotInfo {
            unresolved_version: requested.version().to_string(),
            repository_id: descriptor.repository.id().to_string(),
            metadata,
        });

        let remote = match &descriptor.repository {
            Repository::Remote(repository) => {
                Some(self.remote_info(repository, &coordinate, &descriptor.relocations)?)
            }
            Repository::Local(_) => None,
        };

        Ok(ResolvedArtifact {
            coordinate,
            dependencies: descriptor.dependencies.clone(),
            snapshot,
            remote,
        })
    }

    /// Artifact and relocation download info, fetched over one session
    fn remote_info(
        &self,
        repository: &RemoteRepository,
        coordinate: &Coordinate,
        relocations: &[Coordinate],
    ) -> ResolutionResult<RemoteArtifactInfo> {
        let session = self.downloads.open(repository, &coordinate.to_string())?;

        let download = session.artifact(coordinate)?;
        let relocations = relocations
            .iter()
            .map(|relocation| session.artifact(&relocation.classified_pom()))
            .collect::<ResolutionResult<Vec<_>>>()?;

        Ok(RemoteArtifactInfo {
            authenticated: repository.is_authenticated(),
            download,
            relocations,
        })
    }
}
