//! Error handling utilities for the record store

use std::path::PathBuf;

use feedback_core::error::DomainError;

/// Failures reading or writing the store file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: u64, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the store file simply does not exist yet
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        DomainError::PersistenceError(e.to_string())
    }
}
