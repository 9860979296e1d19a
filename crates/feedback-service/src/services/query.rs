//! Query service
//!
//! Read-only views over the record store.

use feedback_core::error::DomainError;
use feedback_core::stats;
use feedback_core::value_objects::CommentId;
use tracing::instrument;

use crate::dto::{
    CommentListResponse, CommentResponse, CommentSummaryResponse, GlobalStatsResponse,
    HealthResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Query service
pub struct QueryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QueryService<'a> {
    /// Create a new QueryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All tracked comments with summarized stats
    #[instrument(skip(self))]
    pub async fn list_comments(&self) -> ServiceResult<CommentListResponse> {
        let comments = self.ctx.comment_repo().list().await?;
        Ok(CommentListResponse {
            total: comments.len(),
            comments: comments.iter().map(CommentSummaryResponse::from).collect(),
        })
    }

    /// One tracked comment with its reactions
    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: CommentId) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;
        Ok(CommentResponse::from(comment))
    }

    /// Aggregate across every tracked comment
    #[instrument(skip(self))]
    pub async fn global_stats(&self) -> ServiceResult<GlobalStatsResponse> {
        let comments = self.ctx.comment_repo().list().await?;
        Ok(stats::aggregate(&comments).into())
    }

    /// Liveness snapshot
    pub async fn health(&self) -> ServiceResult<HealthResponse> {
        let tracked = self.ctx.comment_repo().count().await?;
        Ok(HealthResponse::healthy(self.ctx.uptime().as_secs(), tracked))
    }
}
