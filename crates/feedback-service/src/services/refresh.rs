//! Reaction refresh service
//!
//! Single-record refresh and the sequential batch updater. A fetch replaces a
//! record's reactions wholesale; a failed fetch leaves the record untouched.

use chrono::Utc;
use feedback_core::entities::TrackedComment;
use feedback_core::error::DomainError;
use feedback_core::value_objects::CommentId;
use tracing::{debug, info, instrument, warn};

use crate::dto::{BatchSummaryResponse, CommentResponse, UpdateAllRequest, UpdateReactionsRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Refresh service
pub struct RefreshService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RefreshService<'a> {
    /// Create a new RefreshService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Refresh one tracked comment
    #[instrument(skip(self))]
    pub async fn update_reactions(
        &self,
        request: UpdateReactionsRequest,
    ) -> ServiceResult<CommentResponse> {
        let id = request
            .comment_id
            .ok_or_else(|| ServiceError::validation("commentId is required"))?;
        let token = required_token(request.token)?;

        let comment = self.refresh_one(id, &token).await?;
        self.persist().await;

        info!(comment_id = %id, "Reactions updated");
        Ok(CommentResponse::from(comment))
    }

    /// Refresh every tracked comment
    #[instrument(skip(self))]
    pub async fn update_all(&self, request: UpdateAllRequest) -> ServiceResult<BatchSummaryResponse> {
        let token = required_token(request.token)?;
        let summary = self.refresh_all(&token).await?;

        info!(
            total = summary.total,
            updated = summary.updated,
            failed = summary.failed,
            "Batch refresh finished"
        );
        Ok(summary)
    }

    /// Fetch, recompute and upsert one record under its lock.
    ///
    /// Does not save the store.
    async fn refresh_one(&self, id: CommentId, token: &str) -> ServiceResult<TrackedComment> {
        let _guard = self.ctx.locks().lock(id).await;

        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;

        let reactions = self
            .ctx
            .reaction_source()
            .fetch_reactions(&comment.repository, comment.kind, id, token)
            .await
            .map_err(|e| {
                warn!(comment_id = %id, error = %e, reason = e.reason(), "Reaction fetch failed");
                ServiceError::Upstream(e)
            })?;

        comment.apply_reactions(reactions, Utc::now());
        self.ctx.comment_repo().upsert(comment.clone()).await?;
        Ok(comment)
    }

    /// Sequential pass over the ids present when the batch starts.
    ///
    /// Failures are counted, never propagated; the store is saved once at the
    /// end when anything changed.
    async fn refresh_all(&self, token: &str) -> ServiceResult<BatchSummaryResponse> {
        let ids = self.ctx.comment_repo().ids().await?;
        let delay = self.ctx.batch_delay();
        let mut summary = BatchSummaryResponse {
            total: ids.len(),
            ..BatchSummaryResponse::default()
        };

        for (i, id) in ids.into_iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match self.refresh_one(id, token).await {
                Ok(_) => summary.updated += 1,
                Err(e) => {
                    debug!(comment_id = %id, error = %e, "Skipping record in batch");
                    summary.failed += 1;
                }
            }
        }

        if summary.updated > 0 {
            self.persist().await;
        }

        Ok(summary)
    }

    /// Save the store; a failure is logged and the in-memory state stays authoritative
    async fn persist(&self) {
        if let Err(e) = self.ctx.comment_repo().save().await {
            warn!(error = %e, "Failed to persist store after refresh");
        }
    }
}

fn required_token(token: Option<String>) -> ServiceResult<String> {
    token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ServiceError::validation("token is required"))
}
