//! Configuration file support for mvn2nix.
//!
//! Provides YAML-based configuration through `mvn2nix.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::closure_resolution::domain::Authentication;
use crate::shared::security::read_validated_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "mvn2nix.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Manifest destination, relative to the project directory
    pub output: Option<String>,
    /// Descriptor catalog location, relative to the project directory
    pub descriptors: Option<String>,
    pub http_timeout_secs: Option<u64>,
    /// Repository credentials keyed by repository id
    pub credentials: Option<BTreeMap<String, CredentialEntry>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Credentials for one repository.
#[derive(Debug, Deserialize)]
pub struct CredentialEntry {
    pub username: String,
    pub password: Option<String>,
}

impl ConfigFile {
    /// Configured credentials as domain values
    pub fn authentications(&self) -> BTreeMap<String, Authentication> {
        self.credentials
            .iter()
            .flatten()
            .map(|(id, entry)| {
                (
                    id.clone(),
                    Authentication::new(entry.username.as_str(), entry.password.clone()),
                )
            })
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_validated_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.http_timeout_secs == Some(0) {
        bail!(
            "Invalid config: http_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default timeout."
        );
    }

    for (id, entry) in config.credentials.iter().flatten() {
        if id.trim().is_empty() {
            bail!("Invalid config: credentials must be keyed by a non-empty repository id.");
        }
        if entry.username.trim().is_empty() {
            bail!(
                "Invalid config: credentials.{}.username must not be empty.\n\n\
                 💡 Hint: Each credentials entry needs a 'username'; 'password' is optional.",
                id
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
output: mvn2nix-lock.json
descriptors: build/descriptors.yml
http_timeout_secs: 60
credentials:
  nexus:
    username: ci
    password: "s3cret"
  github:
    username: bot
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output.as_deref(), Some("mvn2nix-lock.json"));
        assert_eq!(config.descriptors.as_deref(), Some("build/descriptors.yml"));
        assert_eq!(config.http_timeout_secs, Some(60));

        let auth = config.authentications();
        assert_eq!(auth.len(), 2);
        assert_eq!(auth["nexus"].username, "ci");
        assert_eq!(auth["nexus"].password.as_deref(), Some("s3cret"));
        assert!(auth["github"].password.is_none());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: out.json\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().output.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "http_timeout_secs: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("greater than 0"));
    }

    #[test]
    fn test_empty_username_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "credentials:\n  nexus:\n    username: \"  \"\n",
        )
        .unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("credentials.nexus.username must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
output: out.json
format: json
mirrors: []
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.unknown_fields.contains_key("mirrors"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.output.is_none());
        assert!(config.descriptors.is_none());
        assert!(config.http_timeout_secs.is_none());
        assert!(config.authentications().is_empty());
        assert!(config.unknown_fields.is_empty());
    }
}
