//! Tracked comment entity - one monitored comment and its feedback

use chrono::{DateTime, Utc};

use super::{Reaction, Stats};
use crate::stats::calculate;
use crate::value_objects::{CommentId, CommentKind, RepositoryName};

/// Maximum number of body characters kept for presentation
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Tracked comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedComment {
    pub id: CommentId,
    /// Selects the API collection reactions are fetched from
    pub kind: CommentKind,
    /// When the comment was authored on the platform
    pub created_at: DateTime<Utc>,
    /// When this record was created
    pub observed_at: DateTime<Utc>,
    /// When reactions were last refreshed
    pub last_updated_at: Option<DateTime<Utc>>,
    pub repository: RepositoryName,
    /// Issue or pull request number
    pub thread_id: u64,
    pub url: String,
    pub author: String,
    pub body_preview: String,
    /// Reactions from the latest successful fetch, in fetch order
    pub reactions: Vec<Reaction>,
    /// Absent until the first successful fetch
    pub stats: Option<Stats>,
}

impl TrackedComment {
    /// Create a freshly observed issue comment with no reactions yet
    pub fn new(
        id: CommentId,
        repository: RepositoryName,
        thread_id: u64,
        author: String,
        url: String,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind: CommentKind::Issue,
            created_at,
            observed_at: Utc::now(),
            last_updated_at: None,
            repository,
            thread_id,
            url,
            author,
            body_preview: body_preview(body),
            reactions: Vec::new(),
            stats: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: CommentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the reaction set wholesale and recompute stats
    pub fn apply_reactions(&mut self, reactions: Vec<Reaction>, fetched_at: DateTime<Utc>) {
        self.stats = Some(calculate(&reactions));
        self.reactions = reactions;
        self.last_updated_at = Some(fetched_at);
    }

    /// Whether the latest fetch returned at least one reaction
    pub fn has_reactions(&self) -> bool {
        self.stats.is_some_and(|s| s.has_reactions())
    }
}

/// Bounded excerpt of a comment body, cut on a character boundary
pub fn body_preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
