//! Webhook receiver
//!
//! The body is taken as raw bytes so the signature can be checked over exactly
//! what was sent.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use feedback_common::SIGNATURE_HEADER;
use feedback_service::dto::{DELIVERY_HEADER, EVENT_HEADER};
use feedback_service::{WebhookAck, WebhookDelivery, WebhookService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Receive a comment event delivery
///
/// POST /webhook
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<WebhookAck>> {
    let delivery = WebhookDelivery {
        event: header_str(&headers, EVENT_HEADER),
        delivery_id: header_str(&headers, DELIVERY_HEADER),
        signature: header_str(&headers, SIGNATURE_HEADER),
        body: &body,
    };

    let service = WebhookService::new(state.service_context());
    let ack = service.ingest(delivery).await?;
    Ok(Json(ack))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
