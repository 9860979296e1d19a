//! # feedback-core
//!
//! Domain layer containing tracked comments, reactions, the stats calculator,
//! the comment classifier and the ports implemented by the outer layers.
//! This crate has zero dependencies on infrastructure (storage, HTTP, etc.).

pub mod classifier;
pub mod entities;
pub mod error;
pub mod stats;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use classifier::{CommentClassifier, MarkerClassifier, DEFAULT_MARKERS};
pub use entities::{GlobalStats, Reaction, ReactionSentiment, Stats, TrackedComment};
pub use error::{DomainError, FetchError};
pub use traits::{CommentRepository, ReactionSource, RepoResult, UpsertOutcome};
pub use value_objects::{
    CommentId, CommentIdParseError, CommentKind, RepositoryName, RepositoryNameError,
};
