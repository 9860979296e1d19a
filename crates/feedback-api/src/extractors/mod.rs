//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies and path parameters.

mod path;
mod validated;

pub use path::CommentIdPath;
pub use validated::ValidatedJson;
