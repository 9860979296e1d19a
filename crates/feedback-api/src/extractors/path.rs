//! Path parameter extractors
//!
//! Type-safe extraction of comment ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use feedback_core::CommentId;

use crate::response::ApiError;

/// Extract the `:comment_id` path parameter as a [`CommentId`]
#[derive(Debug, Clone, Copy)]
pub struct CommentIdPath(pub CommentId);

#[async_trait]
impl<S> FromRequestParts<S> for CommentIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        CommentId::parse(&raw)
            .map(CommentIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}
