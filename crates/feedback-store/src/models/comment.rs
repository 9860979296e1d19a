//! Tracked comment file model

use chrono::{DateTime, Utc};
use feedback_core::value_objects::CommentKind;
use serde::{Deserialize, Serialize};

/// Serialized form of one tracked comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentModel {
    pub id: u64,
    /// Files written before review comments were tracked have no kind
    #[serde(default)]
    pub kind: CommentKind,
    pub created_at: DateTime<Utc>,
    pub observed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    pub repository: String,
    pub thread_id: u64,
    pub url: String,
    pub author: String,
    #[serde(default)]
    pub body_preview: String,
    #[serde(default)]
    pub reactions: Vec<ReactionModel>,
    /// Written for readers of the file; recomputed from `reactions` on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsModel>,
}

/// Serialized form of one reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionModel {
    #[serde(rename = "type")]
    pub content: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
}

/// Serialized stats snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsModel {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
    pub satisfaction: u8,
}
