//! Reaction entity - one reaction event attached to a tracked comment

use chrono::{DateTime, Utc};

/// Reaction tags counted as positive feedback
pub const POSITIVE_REACTIONS: [&str; 4] = ["+1", "heart", "rocket", "hooray"];

/// Reaction tags counted as negative feedback
pub const NEGATIVE_REACTIONS: [&str; 2] = ["-1", "confused"];

/// Reaction entity
///
/// `content` is the platform's reaction tag (`+1`, `heart`, ...). Tags the
/// platform adds later are kept verbatim and classified as neutral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub content: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(content: impl Into<String>, user: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            user: user.into(),
            created_at,
        }
    }

    /// Classify this reaction
    #[inline]
    pub fn sentiment(&self) -> ReactionSentiment {
        ReactionSentiment::of(&self.content)
    }
}

/// Feedback polarity of a reaction tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionSentiment {
    Positive,
    Negative,
    Neutral,
}

impl ReactionSentiment {
    /// Classify a raw reaction tag
    pub fn of(content: &str) -> Self {
        if POSITIVE_REACTIONS.contains(&content) {
            Self::Positive
        } else if NEGATIVE_REACTIONS.contains(&content) {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}
