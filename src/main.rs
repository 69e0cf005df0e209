use mvn2nix::adapters::outbound::catalog::{
    CachingDescriptorReader, DescriptorCatalog, CATALOG_FILE_NAME,
};
use mvn2nix::adapters::outbound::console::StderrProgressReporter;
use mvn2nix::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use mvn2nix::adapters::outbound::formatters::JsonManifestFormatter;
use mvn2nix::adapters::outbound::layout::Maven2LayoutProvider;
use mvn2nix::adapters::outbound::network::{DefaultTransporterProvider, DEFAULT_HTTP_TIMEOUT_SECS};
use mvn2nix::application::dto::ManifestRequest;
use mvn2nix::application::use_cases::GenerateManifestUseCase;
use mvn2nix::cli::Args;
use mvn2nix::config::{self, ConfigFile};
use mvn2nix::ports::outbound::{ManifestFormatter, OutputPresenter};
use mvn2nix::shared::error::{ExitCode, Mvn2NixError};
use mvn2nix::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".red(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load config: explicit --config, else auto-discovered in the project directory
    let config = match args.config.as_deref() {
        Some(path) => {
            let config = config::load_config_from_path(Path::new(path))?;
            eprintln!("⚙️  Loaded config from: {}", path);
            config
        }
        None => match config::discover_config(&project_path)? {
            Some(config) => {
                eprintln!(
                    "⚙️  Auto-discovered config file: {}",
                    project_path.join(config::CONFIG_FILENAME).display()
                );
                config
            }
            None => ConfigFile::default(),
        },
    };

    // CLI flags win over config values
    let descriptors_path = resolve_path(
        args.descriptors.as_deref(),
        config.descriptors.as_deref(),
        &project_path,
    )
    .unwrap_or_else(|| project_path.join(CATALOG_FILE_NAME));
    let output_path = resolve_path(args.output.as_deref(), config.output.as_deref(), &project_path);

    let catalog = DescriptorCatalog::load(&descriptors_path)?;
    eprintln!(
        "📚 Loaded descriptor catalog: {} ({} artifact(s))",
        descriptors_path.display(),
        catalog.artifact_count()
    );

    // Create adapters (Dependency Injection)
    let use_case = GenerateManifestUseCase::new(
        FileSystemReader::new(),
        CachingDescriptorReader::new(&catalog),
        &catalog,
        Maven2LayoutProvider::new(),
        DefaultTransporterProvider::with_timeout(http_timeout(&config)),
        StderrProgressReporter::new(),
    );

    let request = ManifestRequest::new(project_path)
        .with_credentials(config.authentications())
        .with_traversal_order(args.traversal_order());

    // Execute use case
    let response = use_case.execute(request)?;

    eprintln!("📝 Generating JSON manifest...");
    let formatted_output = JsonManifestFormatter::new().format(&response.manifest)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match output_path {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// A CLI path is taken as given; a config path is relative to the project directory
fn resolve_path(
    cli_value: Option<&str>,
    config_value: Option<&str>,
    project_path: &Path,
) -> Option<PathBuf> {
    cli_value
        .map(PathBuf::from)
        .or_else(|| config_value.map(|value| project_path.join(value)))
}

fn http_timeout(config: &ConfigFile) -> Duration {
    Duration::from_secs(config.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Mvn2NixError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| Mvn2NixError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(Mvn2NixError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(Mvn2NixError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
