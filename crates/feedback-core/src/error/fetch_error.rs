//! Reaction fetch failures
//!
//! Every variant means "no update happened". None of them is ever confused
//! with a successful fetch of zero reactions.

use thiserror::Error;

/// Failure reported by a [`crate::traits::ReactionSource`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("upstream rejected the credential")]
    Unauthorized,

    #[error("upstream refused access (possibly rate limited)")]
    Forbidden,

    #[error("comment not found upstream")]
    NotFound,

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream call timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode upstream response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short machine-readable reason, used in logs and summaries
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Status(_) => "bad_status",
            Self::Timeout => "timeout",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}
