use crate::closure_resolution::domain::{ArtifactMetadata, Coordinate, RemoteRepository};
use crate::ports::outbound::repository_layout::{MD5, SHA1};
use crate::ports::outbound::{ChecksumLocation, RepositoryLayout, RepositoryLayoutProvider};
use crate::shared::Result;

/// Layout id of the standard Maven 2 repository layout
pub const MAVEN2_LAYOUT_ID: &str = "default";

/// Maven2RepositoryLayout maps artifacts to the standard repository layout:
///
/// `group/as/dirs/artifactId/baseVersion/artifactId-version[-classifier].extension`
///
/// Metadata lives at `group/as/dirs/artifactId/version/maven-metadata.xml`.
/// Characters not allowed in a URL path segment are percent-encoded; all
/// others are kept so URLs match the repository's literal file paths.
pub struct Maven2RepositoryLayout {
    /// (algorithm, file extension) pairs, in preference order
    checksum_algorithms: Vec<(String, String)>,
}

impl Maven2RepositoryLayout {
    pub fn new() -> Self {
        Self::with_algorithms(vec![
            (SHA1.to_string(), "sha1".to_string()),
            (MD5.to_string(), "md5".to_string()),
        ])
    }

    /// Layout publishing only the given checksum algorithms
    pub fn with_algorithms(checksum_algorithms: Vec<(String, String)>) -> Self {
        Self {
            checksum_algorithms,
        }
    }

    fn group_path(group_id: &str) -> String {
        group_id
            .split('.')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Maven2RepositoryLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryLayout for Maven2RepositoryLayout {
    fn artifact_location(&self, coordinate: &Coordinate) -> String {
        let mut file_name = format!("{}-{}", coordinate.artifact_id(), coordinate.version());
        if !coordinate.classifier().is_empty() {
            file_name.push('-');
            file_name.push_str(coordinate.classifier());
        }
        file_name.push('.');
        file_name.push_str(coordinate.extension());

        format!(
            "{}/{}/{}/{}",
            Self::group_path(coordinate.group_id()),
            encode_segment(coordinate.artifact_id()),
            encode_segment(&coordinate.base_version()),
            encode_segment(&file_name)
        )
    }

    fn metadata_location(&self, metadata: &ArtifactMetadata) -> String {
        format!(
            "{}/{}/{}/{}",
            Self::group_path(&metadata.group_id),
            encode_segment(&metadata.artifact_id),
            encode_segment(&metadata.version),
            encode_segment(&metadata.file_name)
        )
    }

    fn checksums(&self, location: &str) -> Vec<ChecksumLocation> {
        self.checksum_algorithms
            .iter()
            .map(|(algorithm, extension)| ChecksumLocation {
                algorithm: algorithm.clone(),
                location: format!("{}.{}", location, extension),
            })
            .collect()
    }
}

/// RFC 3986 `pchar`: unreserved, sub-delims, `:` and `@`
fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';'
                | '=' | ':' | '@'
        )
}

fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    let mut buf = [0u8; 4];
    for c in segment.chars() {
        if is_path_char(c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    encoded
}

/// Maven2LayoutProvider adapter for the RepositoryLayoutProvider port
///
/// Only the `default` layout id is supported.
pub struct Maven2LayoutProvider;

impl Maven2LayoutProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Maven2LayoutProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryLayoutProvider for Maven2LayoutProvider {
    fn new_repository_layout(
        &self,
        repository: &RemoteRepository,
    ) -> Result<Box<dyn RepositoryLayout>> {
        if repository.layout != MAVEN2_LAYOUT_ID {
            anyhow::bail!(
                "Unsupported repository layout '{}' for repository '{}' (supported: {})",
                repository.layout,
                repository.id,
                MAVEN2_LAYOUT_ID
            );
        }
        Ok(Box::new(Maven2RepositoryLayout::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_artifact_location() {
        let layout = Maven2RepositoryLayout::new();
        assert_eq!(
            layout.artifact_location(&coord("org.apache.commons:commons-lang3:3.12.0")),
            "org/apache/commons/commons-lang3/3.12.0/commons-lang3-3.12.0.jar"
        );
    }

    #[test]
    fn test_artifact_location_with_classifier() {
        let layout = Maven2RepositoryLayout::new();
        assert_eq!(
            layout.artifact_location(&coord("io.netty:netty-transport-native-epoll:jar:linux-x86_64:4.1.100.Final")),
            "io/netty/netty-transport-native-epoll/4.1.100.Final/netty-transport-native-epoll-4.1.100.Final-linux-x86_64.jar"
        );
    }

    #[test]
    fn test_timestamped_snapshot_uses_base_version_directory() {
        let layout = Maven2RepositoryLayout::new();
        assert_eq!(
            layout.artifact_location(&coord("com.example:lib:pom:1.0-20230101.000000-3")),
            "com/example/lib/1.0-SNAPSHOT/lib-1.0-20230101.000000-3.pom"
        );
    }

    #[test]
    fn test_metadata_location() {
        let layout = Maven2RepositoryLayout::new();
        let metadata = ArtifactMetadata::for_snapshot(&coord("com.example:lib:1.0-SNAPSHOT"), "1.0-SNAPSHOT");
        assert_eq!(
            layout.metadata_location(&metadata),
            "com/example/lib/1.0-SNAPSHOT/maven-metadata.xml"
        );
    }

    #[test]
    fn test_path_characters_are_kept_verbatim() {
        let layout = Maven2RepositoryLayout::new();
        assert_eq!(
            layout.artifact_location(&coord("org.example:lib+extra:1.0")),
            "org/example/lib+extra/1.0/lib+extra-1.0.jar"
        );
        assert_eq!(
            layout.artifact_location(&coord("org.example:lib:jar:a=b,c@d:1.0~rc(1)")),
            "org/example/lib/1.0~rc(1)/lib-1.0~rc(1)-a=b,c@d.jar"
        );
    }

    #[test]
    fn test_illegal_path_characters_are_percent_encoded() {
        let layout = Maven2RepositoryLayout::new();
        assert_eq!(
            layout.artifact_location(&coord("org.example:lib#1:1.0?x")),
            "org/example/lib%231/1.0%3Fx/lib%231-1.0%3Fx.jar"
        );
        assert_eq!(encode_segment("caf\u{e9}%"), "caf%C3%A9%25");
    }

    #[test]
    fn test_checksums() {
        let layout = Maven2RepositoryLayout::new();
        let checksums = layout.checksums("a/b/c.jar");

        assert_eq!(checksums.len(), 2);
        assert!(checksums[0].is_sha1());
        assert_eq!(checksums[0].location, "a/b/c.jar.sha1");
        assert_eq!(checksums[1].algorithm, "MD5");
        assert_eq!(checksums[1].location, "a/b/c.jar.md5");
    }

    #[test]
    fn test_provider_rejects_unknown_layout() {
        let provider = Maven2LayoutProvider::new();
        let legacy = RemoteRepository::new("old", "https://repo").with_layout("legacy");

        let result = provider.new_repository_layout(&legacy);

        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("legacy"));
    }

    #[test]
    fn test_provider_default_layout() {
        let provider = Maven2LayoutProvider::new();
        let central = RemoteRepository::new("central", "https://repo");
        assert!(provider.new_repository_layout(&central).is_ok());
    }
}
