//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use feedback_core::entities::{GlobalStats, Reaction, Stats, TrackedComment};

use super::responses::{
    CommentResponse, CommentSummaryResponse, GlobalStatsResponse, ReactionResponse, StatsResponse,
};

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            content: reaction.content.clone(),
            user: reaction.user.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total: stats.total,
            positive: stats.positive,
            negative: stats.negative,
            satisfaction: stats.satisfaction,
        }
    }
}

impl From<&TrackedComment> for CommentResponse {
    fn from(comment: &TrackedComment) -> Self {
        Self {
            id: comment.id,
            created_at: comment.created_at,
            observed_at: comment.observed_at,
            last_updated_at: comment.last_updated_at,
            repository: comment.repository.to_string(),
            thread_id: comment.thread_id,
            url: comment.url.clone(),
            author: comment.author.clone(),
            body_preview: comment.body_preview.clone(),
            reactions: comment.reactions.iter().map(ReactionResponse::from).collect(),
            stats: comment.stats.map(StatsResponse::from),
        }
    }
}

impl From<TrackedComment> for CommentResponse {
    fn from(comment: TrackedComment) -> Self {
        Self::from(&comment)
    }
}

impl From<&TrackedComment> for CommentSummaryResponse {
    fn from(comment: &TrackedComment) -> Self {
        Self {
            id: comment.id,
            created_at: comment.created_at,
            observed_at: comment.observed_at,
            last_updated_at: comment.last_updated_at,
            repository: comment.repository.to_string(),
            thread_id: comment.thread_id,
            url: comment.url.clone(),
            author: comment.author.clone(),
            stats: comment.stats.map(StatsResponse::from).unwrap_or_default(),
        }
    }
}

impl From<GlobalStats> for GlobalStatsResponse {
    fn from(stats: GlobalStats) -> Self {
        Self {
            total_comments: stats.total_comments,
            comments_with_reactions: stats.comments_with_reactions,
            total_reactions: stats.total_reactions,
            positive_reactions: stats.positive_reactions,
            negative_reactions: stats.negative_reactions,
            overall_satisfaction: stats.overall_satisfaction,
            engagement_rate: stats.engagement_rate,
        }
    }
}
