use crate::shared::error::Mvn2NixError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum length for a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

pub const DEFAULT_EXTENSION: &str = "jar";
pub const POM_EXTENSION: &str = "pom";
pub const METADATA_FILE_NAME: &str = "maven-metadata.xml";

const SNAPSHOT: &str = "SNAPSHOT";

/// Artifact coordinate: `groupId:artifactId[:extension[:classifier]]:version`
///
/// An absent classifier is the empty string. Components are validated on
/// construction because they end up as path segments in repository URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    extension: String,
    classifier: String,
    version: String,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: impl Into<String>,
        extension: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let extension = extension.into();
        let extension = if extension.is_empty() {
            DEFAULT_EXTENSION.to_string()
        } else {
            extension
        };

        let coordinate = Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            extension,
            classifier: classifier.into(),
            version: version.into(),
        };

        validate_component(&coordinate.group_id, "groupId", true)?;
        validate_component(&coordinate.artifact_id, "artifactId", true)?;
        validate_component(&coordinate.extension, "extension", true)?;
        validate_component(&coordinate.classifier, "classifier", false)?;
        validate_component(&coordinate.version, "version", true)?;

        Ok(coordinate)
    }

    /// Shorthand for a classifier-less coordinate
    pub fn simple(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        extension: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        Self::new(group_id, artifact_id, "", extension, version)
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_pom(&self) -> bool {
        self.extension == POM_EXTENSION
    }

    /// Same artifact at another version
    pub fn with_version(&self, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        validate_component(&version, "version", true)?;
        Ok(Self {
            version,
            ..self.clone()
        })
    }

    /// The POM of this artifact: classifier dropped, extension `pom`
    pub fn pom(&self) -> Self {
        Self {
            extension: POM_EXTENSION.to_string(),
            classifier: String::new(),
            ..self.clone()
        }
    }

    /// The POM published next to a classified artifact; the classifier is kept
    pub fn classified_pom(&self) -> Self {
        Self {
            extension: POM_EXTENSION.to_string(),
            ..self.clone()
        }
    }

    /// Whether the version floats and must be pinned by a version resolver.
    ///
    /// Both `1.0-SNAPSHOT` and already-timestamped `1.0-20230101.000000-3`
    /// count, mirroring how Maven treats deployed snapshot builds.
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT) || snapshot_timestamp_prefix(&self.version).is_some()
    }

    /// Directory version used by repository layouts: a timestamped snapshot
    /// lives under its `-SNAPSHOT` directory.
    pub fn base_version(&self) -> String {
        match snapshot_timestamp_prefix(&self.version) {
            Some(prefix) => format!("{}{}", prefix, SNAPSHOT),
            None => self.version.clone(),
        }
    }

    /// Deduplication key. Callers pass the coordinate *before* snapshot
    /// resolution so every build of one snapshot collapses to one entry.
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey(self.clone())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.extension)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, ":{}", self.version)
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    /// Parses `g:a:v`, `g:a:ext:v` or `g:a:ext:classifier:v`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [g, a, v] => Self::new(*g, *a, "", DEFAULT_EXTENSION, *v),
            [g, a, ext, v] => Self::new(*g, *a, "", *ext, *v),
            [g, a, ext, classifier, v] => Self::new(*g, *a, *classifier, *ext, *v),
            _ => Err(Mvn2NixError::Validation {
                message: format!(
                    "Invalid coordinate '{}': expected groupId:artifactId[:extension[:classifier]]:version",
                    s
                ),
            }
            .into()),
        }
    }
}

/// Identity of a manifest entry: the coordinate with its requested version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey(Coordinate);

impl ArtifactKey {
    pub fn coordinate(&self) -> &Coordinate {
        &self.0
    }
}

/// Repository metadata file (`maven-metadata.xml`) for one artifact version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMetadata {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub file_name: String,
}

impl ArtifactMetadata {
    /// Snapshot metadata describing which build a floating version points to
    pub fn for_snapshot(coordinate: &Coordinate, unresolved_version: &str) -> Self {
        Self {
            group_id: coordinate.group_id().to_string(),
            artifact_id: coordinate.artifact_id().to_string(),
            version: unresolved_version.to_string(),
            file_name: METADATA_FILE_NAME.to_string(),
        }
    }
}

impl fmt::Display for ArtifactMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}/{}",
            self.group_id, self.artifact_id, self.version, self.file_name
        )
    }
}

fn validate_component(value: &str, name: &str, required: bool) -> Result<()> {
    if value.is_empty() {
        if required {
            return Err(Mvn2NixError::Validation {
                message: format!("Coordinate {} cannot be empty", name),
            }
            .into());
        }
        return Ok(());
    }

    if value.len() > MAX_COMPONENT_LENGTH {
        return Err(Mvn2NixError::Validation {
            message: format!(
                "Coordinate {} is too long ({} bytes). Maximum allowed: {} bytes",
                name,
                value.len(),
                MAX_COMPONENT_LENGTH
            ),
        }
        .into());
    }

    // Components become URL path segments; forbid separators and traversal.
    if value == "."
        || value.contains("..")
        || value
            .chars()
            .any(|c| c == ':' || c == '/' || c == '\\' || c.is_whitespace() || c.is_control())
    {
        return Err(Mvn2NixError::Validation {
            message: format!("Coordinate {} '{}' contains invalid characters", name, value),
        }
        .into());
    }

    Ok(())
}

/// For `<prefix>YYYYMMDD.HHMMSS-<build>` returns `<prefix>` (empty or ending in `-`)
fn snapshot_timestamp_prefix(version: &str) -> Option<&str> {
    let (head, build) = version.rsplit_once('-')?;
    if build.is_empty() || !build.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let stamp_start = head.len().checked_sub(15)?;
    let stamp = head.get(stamp_start..)?.as_bytes();
    let well_formed = stamp[..8].iter().all(u8::is_ascii_digit)
        && stamp[8] == b'.'
        && stamp[9..].iter().all(u8::is_ascii_digit);
    if !well_formed {
        return None;
    }

    let prefix = head.get(..stamp_start)?;
    if prefix.is_empty() || prefix.ends_with('-') {
        Some(prefix)
    } else {
        None
    }
}
