//! Feedback query handlers
//!
//! Read-only endpoints over the tracked comment store.

use axum::{extract::State, Json};
use feedback_service::{CommentListResponse, CommentResponse, GlobalStatsResponse, QueryService};

use crate::extractors::CommentIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List every tracked comment with summarized stats
///
/// GET /api/feedback
pub async fn list_feedback(State(state): State<AppState>) -> ApiResult<Json<CommentListResponse>> {
    let service = QueryService::new(state.service_context());
    let response = service.list_comments().await?;
    Ok(Json(response))
}

/// Get one tracked comment including its reactions
///
/// GET /api/feedback/:comment_id
pub async fn get_feedback(
    State(state): State<AppState>,
    CommentIdPath(comment_id): CommentIdPath,
) -> ApiResult<Json<CommentResponse>> {
    let service = QueryService::new(state.service_context());
    let response = service.get_comment(comment_id).await?;
    Ok(Json(response))
}

/// Aggregate stats across all tracked comments
///
/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<GlobalStatsResponse>> {
    let service = QueryService::new(state.service_context());
    let response = service.global_stats().await?;
    Ok(Json(response))
}
