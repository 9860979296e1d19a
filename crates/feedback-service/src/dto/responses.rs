//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase keys.
//! Comment IDs are serialized as numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use feedback_core::value_objects::CommentId;

// ============================================================================
// Comment Responses
// ============================================================================

/// Full tracked comment record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub created_at: DateTime<Utc>,
    pub observed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    pub repository: String,
    pub thread_id: u64,
    pub url: String,
    pub author: String,
    pub body_preview: String,
    pub reactions: Vec<ReactionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsResponse>,
}

/// List entry; stats are zeros until the first refresh
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSummaryResponse {
    pub id: CommentId,
    pub created_at: DateTime<Utc>,
    pub observed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    pub repository: String,
    pub thread_id: u64,
    pub url: String,
    pub author: String,
    pub stats: StatsResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub total: usize,
    pub comments: Vec<CommentSummaryResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    #[serde(rename = "type")]
    pub content: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
    pub satisfaction: u8,
}

// ============================================================================
// Aggregate Responses
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStatsResponse {
    pub total_comments: u64,
    pub comments_with_reactions: u64,
    pub total_reactions: u64,
    pub positive_reactions: u64,
    pub negative_reactions: u64,
    pub overall_satisfaction: u8,
    pub engagement_rate: u8,
}

/// Outcome of a batch refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummaryResponse {
    /// Records attempted
    pub total: usize,
    pub updated: usize,
    pub failed: usize,
}

// ============================================================================
// Webhook Responses
// ============================================================================

/// Acknowledgement returned for every verified delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WebhookAck {
    Tracked {
        #[serde(rename = "commentId")]
        comment_id: CommentId,
    },
    Ignored {
        reason: String,
    },
}

impl WebhookAck {
    pub fn ignored(reason: impl Into<String>) -> Self {
        Self::Ignored {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub tracked_comments: usize,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(uptime_seconds: u64, tracked_comments: usize) -> Self {
        Self {
            status: "ok",
            uptime_seconds,
            tracked_comments,
            timestamp: Utc::now(),
        }
    }
}
