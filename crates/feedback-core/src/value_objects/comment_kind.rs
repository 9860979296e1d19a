//! Comment kind - which comment collection a tracked comment lives in

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a comment was posted.
///
/// Issue and pull request conversation comments share one id space and API
/// path; review comments on a pull request diff use another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentKind {
    /// Conversation comment on an issue or pull request
    #[default]
    Issue,
    /// Review comment on a pull request diff
    ReviewComment,
}

impl CommentKind {
    /// Path segment of the comment collection under `/repos/{owner}/{name}`
    pub const fn api_collection(self) -> &'static str {
        match self {
            Self::Issue => "issues/comments",
            Self::ReviewComment => "pulls/comments",
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue => f.write_str("issue"),
            Self::ReviewComment => f.write_str("reviewComment"),
        }
    }
}
