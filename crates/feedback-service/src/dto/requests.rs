//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Access tokens are request scoped: they are redacted from `Debug` output and
//! never stored.

use std::fmt;

use serde::Deserialize;
use validator::Validate;

use feedback_core::value_objects::CommentId;

/// Single refresh request
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReactionsRequest {
    /// Number or numeric string
    #[validate(required(message = "commentId is required"))]
    pub comment_id: Option<CommentId>,

    #[validate(
        required(message = "token is required"),
        length(min = 1, message = "token must not be empty")
    )]
    pub token: Option<String>,
}

/// Batch refresh request
#[derive(Clone, Deserialize, Validate)]
pub struct UpdateAllRequest {
    #[validate(
        required(message = "token is required"),
        length(min = 1, message = "token must not be empty")
    )]
    pub token: Option<String>,
}

impl fmt::Debug for UpdateReactionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateReactionsRequest")
            .field("comment_id", &self.comment_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Debug for UpdateAllRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateAllRequest")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
