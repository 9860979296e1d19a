//! Repository implementations
//!
//! File-backed implementation of the `CommentRepository` port from feedback-core.

mod error;
mod json_file;

pub use error::StoreError;
pub use json_file::JsonFileCommentRepository;
