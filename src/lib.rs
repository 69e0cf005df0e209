//! mvn2nix - dependency closure manifests for Maven projects
//!
//! This library computes the transitive dependency closure of a Maven
//! project (parent POMs, build plugins and dependencies) and describes every
//! artifact in it with a download URL and SHA-1, so the closure can be
//! fetched reproducibly, e.g. by Nix.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`closure_resolution`): coordinate model, scope policy and the closure engine
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn2nix::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let catalog = DescriptorCatalog::load(Path::new("mvn2nix.descriptors.yml"))?;
//!
//! let use_case = GenerateManifestUseCase::new(
//!     FileSystemReader::new(),
//!     CachingDescriptorReader::new(&catalog),
//!     &catalog,
//!     Maven2LayoutProvider::new(),
//!     DefaultTransporterProvider::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ManifestRequest::new(PathBuf::from(".")))?;
//!
//! let output = JsonManifestFormatter::new().format(&response.manifest)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod closure_resolution;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{CachingDescriptorReader, DescriptorCatalog};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonManifestFormatter;
    pub use crate::adapters::outbound::layout::Maven2LayoutProvider;
    pub use crate::adapters::outbound::network::DefaultTransporterProvider;
    pub use crate::application::dto::{ManifestRequest, ManifestResponse};
    pub use crate::application::use_cases::GenerateManifestUseCase;
    pub use crate::closure_resolution::domain::{
        Coordinate, DependencyEdge, Exclusion, ManifestTree, Repository, ResolutionError,
        ResolvedArtifact, Scope,
    };
    pub use crate::closure_resolution::policies::ScopePolicy;
    pub use crate::closure_resolution::services::{ClosureResolver, TraversalOrder};
    pub use crate::ports::outbound::{
        ArtifactDescriptorReader, ManifestFormatter, OutputPresenter, ProgressReporter,
        ProjectReader, RepositoryLayoutProvider, TransporterProvider, VersionResolver,
    };
    pub use crate::shared::Result;
}
