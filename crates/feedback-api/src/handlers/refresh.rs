//! Reaction refresh handlers

use axum::{extract::State, Json};
use feedback_service::{
    BatchSummaryResponse, CommentResponse, RefreshService, UpdateAllRequest,
    UpdateReactionsRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Refresh the reactions of one tracked comment
///
/// POST /api/update-reactions
pub async fn update_reactions(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateReactionsRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = RefreshService::new(state.service_context());
    let response = service.update_reactions(request).await?;
    Ok(Json(response))
}

/// Refresh every tracked comment sequentially
///
/// POST /api/update-all
///
/// Per-record failures are counted in the summary rather than failing the request.
pub async fn update_all(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateAllRequest>,
) -> ApiResult<Json<BatchSummaryResponse>> {
    let service = RefreshService::new(state.service_context());
    let response = service.update_all(request).await?;
    Ok(Json(response))
}
