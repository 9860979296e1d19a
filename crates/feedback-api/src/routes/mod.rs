//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{feedback, health, refresh, webhook};
use crate::middleware::timeout_layer;
use crate::state::AppState;

/// Largest webhook body accepted
pub const WEBHOOK_BODY_LIMIT: usize = 1024 * 1024;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(webhook_routes())
        .nest("/api", api_routes())
        .merge(health_routes())
        .layer(timeout_layer())
        // Runs one courtesy delay per record, so it is not bounded by the request timeout
        .route("/api/update-all", post(refresh::update_all))
}

/// Inbound webhook deliveries
fn webhook_routes() -> Router<AppState> {
    Router::new().route(
        "/webhook",
        post(webhook::receive_webhook).layer(RequestBodyLimitLayer::new(WEBHOOK_BODY_LIMIT)),
    )
}

/// Single refresh and query routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/update-reactions", post(refresh::update_reactions))
        .route("/feedback", get(feedback::list_feedback))
        .route("/feedback/:comment_id", get(feedback::get_feedback))
        .route("/stats", get(feedback::get_stats))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
