use clap::Parser;

use crate::closure_resolution::services::TraversalOrder;

/// Compute the dependency closure of a Maven project as a Nix-friendly JSON manifest
#[derive(Parser, Debug)]
#[command(name = "mvn2nix")]
#[command(version)]
#[command(
    about = "Compute the dependency closure of a Maven project as a Nix-friendly JSON manifest",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Descriptor catalog (defaults to mvn2nix.descriptors.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub descriptors: Option<String>,

    /// Config file (defaults to mvn2nix.config.yml in the project directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Take edges from the back of the work set; the manifest content must not change
    #[arg(long)]
    pub reverse: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn traversal_order(&self) -> TraversalOrder {
        if self.reverse {
            TraversalOrder::Reverse
        } else {
            TraversalOrder::Forward
        }
    }
}
