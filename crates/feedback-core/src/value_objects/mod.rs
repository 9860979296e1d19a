//! Value objects - immutable domain primitives

mod comment_id;
mod comment_kind;
mod repository;

pub use comment_id::{CommentId, CommentIdParseError};
pub use comment_kind::CommentKind;
pub use repository::{RepositoryName, RepositoryNameError};
