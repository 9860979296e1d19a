//! On-disk models
//!
//! The store file is a JSON array of [`CommentModel`] using camelCase keys.

mod comment;

pub use comment::{CommentModel, ReactionModel, StatsModel};
