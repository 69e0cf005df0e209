use super::Coordinate;
use thiserror::Error;

/// Result of closure resolution steps
pub type ResolutionResult<T> = std::result::Result<T, ResolutionError>;

/// Fatal failure of a closure resolution run.
///
/// There is no partial result: any of these aborts the run and no manifest
/// is written.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to read artifact descriptor for {coordinate}")]
    DescriptorResolution {
        coordinate: Coordinate,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to resolve version of {coordinate}")]
    VersionResolution {
        coordinate: Coordinate,
        #[source]
        source: anyhow::Error,
    },

    #[error("No repository layout for repository '{repository}' (needed for {target})")]
    Layout {
        repository: String,
        target: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("No SHA-1 checksum advertised for {target} in repository '{repository}'\n\n💡 Hint: Only SHA-1 checksums are accepted")]
    ChecksumMissing { repository: String, target: String },

    #[error("Downloading SHA-1 for {target} from repository '{repository}' failed")]
    Transport {
        repository: String,
        target: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_descriptor_error_names_coordinate_and_keeps_cause() {
        let error = ResolutionError::DescriptorResolution {
            coordinate: "org.example:lib:1.0".parse().unwrap(),
            source: anyhow::anyhow!("404 Not Found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read artifact descriptor for org.example:lib:jar:1.0"
        );
        assert_eq!(error.source().unwrap().to_string(), "404 Not Found");
    }

    #[test]
    fn test_checksum_missing_display() {
        let error = ResolutionError::ChecksumMissing {
            repository: "central".to_string(),
            target: "org.example:lib:jar:1.0".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("No SHA-1 checksum"));
        assert!(display.contains("central"));
        assert!(display.contains("💡 Hint:"));
    }
}
