//! Ports implemented by the infrastructure layers

mod repositories;

pub use repositories::{CommentRepository, ReactionSource, RepoResult, UpsertOutcome};
