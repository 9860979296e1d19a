//! Repository name - `owner/name` pair used to route external API calls

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified repository name (`owner/name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryName {
    full_name: String,
    split: usize,
}

impl RepositoryName {
    /// Parse and validate a full repository name
    pub fn parse(full_name: &str) -> Result<Self, RepositoryNameError> {
        let full_name = full_name.trim();
        let split = full_name
            .find('/')
            .ok_or_else(|| RepositoryNameError::MissingSeparator(full_name.to_string()))?;

        let (owner, name) = (&full_name[..split], &full_name[split + 1..]);
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(RepositoryNameError::Malformed(full_name.to_string()));
        }

        Ok(Self {
            full_name: full_name.to_string(),
            split,
        })
    }

    /// Repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.full_name[..self.split]
    }

    /// Repository name without the owner
    pub fn name(&self) -> &str {
        &self.full_name[self.split + 1..]
    }

    /// Full `owner/name` form
    pub fn as_str(&self) -> &str {
        &self.full_name
    }
}

/// Error when parsing a repository name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryNameError {
    #[error("repository name `{0}` is missing the owner separator")]
    MissingSeparator(String),

    #[error("repository name `{0}` is not of the form owner/name")]
    Malformed(String),
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl std::str::FromStr for RepositoryName {
    type Err = RepositoryNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RepositoryName {
    type Error = RepositoryNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RepositoryName> for String {
    fn from(value: RepositoryName) -> Self {
        value.full_name
    }
}
