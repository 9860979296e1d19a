//! Wire models of the reactions endpoint

use chrono::{DateTime, Utc};
use serde::Deserialize;

use feedback_core::entities::Reaction;

/// Login used for reactions whose author account no longer exists
pub const GHOST_USER: &str = "ghost";

/// One element of the reactions list
#[derive(Debug, Clone, Deserialize)]
pub struct RawReaction {
    pub content: String,
    #[serde(default)]
    pub user: Option<RawUser>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
}

impl From<RawReaction> for Reaction {
    fn from(raw: RawReaction) -> Self {
        let user = raw
            .user
            .map_or_else(|| GHOST_USER.to_string(), |u| u.login);
        Reaction::new(raw.content, user, raw.created_at)
    }
}
