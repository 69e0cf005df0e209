use super::Coordinate;
use crate::shared::error::Mvn2NixError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

const WILDCARD: &str = "*";

/// Exclusion rule `groupId:artifactId`
///
/// Matches every classifier, extension and version of the named artifact.
/// Either component may be `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Exclusion {
    group_id: String,
    artifact_id: String,
}

impl Exclusion {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        if group_id.is_empty() || artifact_id.is_empty() {
            return Err(Mvn2NixError::Validation {
                message: format!(
                    "Exclusion '{}:{}' must name both groupId and artifactId",
                    group_id, artifact_id
                ),
            }
            .into());
        }
        Ok(Self {
            group_id,
            artifact_id,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        (self.group_id == WILDCARD || self.group_id == coordinate.group_id())
            && (self.artifact_id == WILDCARD || self.artifact_id == coordinate.artifact_id())
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for Exclusion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((group_id, artifact_id)) if !artifact_id.contains(':') => {
                Self::new(group_id, artifact_id)
            }
            _ => Err(Mvn2NixError::Validation {
                message: format!("Invalid exclusion '{}': expected groupId:artifactId", s),
            }
            .into()),
        }
    }
}
