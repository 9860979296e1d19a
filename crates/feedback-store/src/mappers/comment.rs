//! Tracked comment entity <-> model mapper

use feedback_core::entities::{Reaction, Stats, TrackedComment};
use feedback_core::stats::calculate;
use feedback_core::value_objects::{CommentId, RepositoryName};

use crate::models::{CommentModel, ReactionModel, StatsModel};
use crate::repositories::StoreError;

impl From<&Reaction> for ReactionModel {
    fn from(reaction: &Reaction) -> Self {
        Self {
            content: reaction.content.clone(),
            user: reaction.user.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction::new(model.content, model.user, model.created_at)
    }
}

impl From<Stats> for StatsModel {
    fn from(stats: Stats) -> Self {
        Self {
            total: stats.total,
            positive: stats.positive,
            negative: stats.negative,
            satisfaction: stats.satisfaction,
        }
    }
}

impl From<&TrackedComment> for CommentModel {
    fn from(comment: &TrackedComment) -> Self {
        Self {
            id: comment.id.into_inner(),
            kind: comment.kind,
            created_at: comment.created_at,
            observed_at: comment.observed_at,
            last_updated_at: comment.last_updated_at,
            repository: comment.repository.to_string(),
            thread_id: comment.thread_id,
            url: comment.url.clone(),
            author: comment.author.clone(),
            body_preview: comment.body_preview.clone(),
            reactions: comment.reactions.iter().map(ReactionModel::from).collect(),
            stats: comment.stats.map(StatsModel::from),
        }
    }
}

/// Rebuild a tracked comment from its file form.
///
/// Stats presence is taken from the file, their values from the reactions.
impl TryFrom<CommentModel> for TrackedComment {
    type Error = StoreError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        let repository =
            RepositoryName::parse(&model.repository).map_err(|e| StoreError::InvalidRecord {
                id: model.id,
                reason: e.to_string(),
            })?;

        let reactions: Vec<Reaction> = model.reactions.into_iter().map(Reaction::from).collect();
        let stats = model.stats.map(|_| calculate(&reactions));

        Ok(TrackedComment {
            id: CommentId::new(model.id),
            kind: model.kind,
            created_at: model.created_at,
            observed_at: model.observed_at,
            last_updated_at: model.last_updated_at,
            repository,
            thread_id: model.thread_id,
            url: model.url,
            author: model.author,
            body_preview: model.body_preview,
            reactions,
            stats,
        })
    }
}
