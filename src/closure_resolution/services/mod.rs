mod closure_resolver;
mod download_info;
mod seed_collector;

pub use closure_resolver::{ClosureResolver, TraversalOrder};
pub use download_info::{build_url, DownloadInfoResolver, RepositorySession};
pub use seed_collector::SeedCollector;
