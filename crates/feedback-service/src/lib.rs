//! # feedback-service
//!
//! Application layer: webhook ingestion, single and batch reaction refresh,
//! read queries, the GitHub reaction client and the DTOs exchanged with the
//! HTTP surface.

pub mod dto;
pub mod github;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use dto::{
    BatchSummaryResponse, CommentListResponse, CommentResponse, CommentSummaryResponse,
    GlobalStatsResponse, HealthResponse, ReactionResponse, StatsResponse, UpdateAllRequest,
    UpdateReactionsRequest, WebhookAck, WebhookDelivery,
};
pub use github::GitHubClient;
pub use services::{
    QueryService, RefreshService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, WebhookService,
};
