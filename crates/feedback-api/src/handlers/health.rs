//! Health check handler

use axum::{extract::State, Json};
use feedback_service::{HealthResponse, QueryService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Liveness probe with uptime and record count
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let service = QueryService::new(state.service_context());
    let response = service.health().await?;
    Ok(Json(response))
}
