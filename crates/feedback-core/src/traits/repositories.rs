//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Reaction, TrackedComment};
use crate::error::{DomainError, FetchError};
use crate::value_objects::{CommentId, CommentKind, RepositoryName};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Whether an upsert created a record or replaced one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert the comment, or fully replace the record with the same id
    async fn upsert(&self, comment: TrackedComment) -> RepoResult<UpsertOutcome>;

    /// Find a tracked comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<TrackedComment>>;

    /// All tracked comments in insertion order
    async fn list(&self) -> RepoResult<Vec<TrackedComment>>;

    /// IDs of all tracked comments in insertion order
    async fn ids(&self) -> RepoResult<Vec<CommentId>>;

    /// Number of tracked comments
    async fn count(&self) -> RepoResult<usize>;

    /// Persist the whole table, overwriting the previous snapshot
    async fn save(&self) -> RepoResult<()>;
}

// ============================================================================
// Reaction Source
// ============================================================================

#[async_trait]
pub trait ReactionSource: Send + Sync {
    /// Fetch the current reactions of a comment.
    ///
    /// `kind` selects the comment collection the id belongs to. The credential
    /// is request scoped and must not be retained.
    async fn fetch_reactions(
        &self,
        repository: &RepositoryName,
        kind: CommentKind,
        comment_id: CommentId,
        token: &str,
    ) -> Result<Vec<Reaction>, FetchError>;
}
