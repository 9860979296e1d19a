//! Webhook ingestion service
//!
//! Verifies, routes and classifies inbound deliveries and upserts a record
//! for every tracked comment.

use feedback_common::AppError;
use feedback_core::entities::TrackedComment;
use feedback_core::value_objects::RepositoryName;
use tracing::{debug, info, instrument, warn};

use crate::dto::webhook::{ActionEnvelope, CommentCreatedPayload, CREATED_ACTION};
use crate::dto::{CommentEvent, WebhookAck, WebhookDelivery};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Webhook service
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    /// Create a new WebhookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Process one delivery.
    ///
    /// The signature is checked over the raw bytes before anything is parsed.
    /// Untracked events, actions and comments are acknowledged without any
    /// state change.
    #[instrument(skip(self, delivery), fields(event = ?delivery.event, delivery_id = ?delivery.delivery_id))]
    pub async fn ingest(&self, delivery: WebhookDelivery<'_>) -> ServiceResult<WebhookAck> {
        if !self.ctx.verifier().verify(delivery.body, delivery.signature) {
            warn!("Rejected delivery with invalid signature");
            return Err(AppError::InvalidSignature.into());
        }

        let Some(event) = delivery.event.and_then(CommentEvent::from_header) else {
            let name = delivery.event.unwrap_or("<none>");
            debug!("Ignoring untracked event");
            return Ok(WebhookAck::ignored(format!("event {name} is not tracked")));
        };

        let envelope: ActionEnvelope = serde_json::from_slice(delivery.body)
            .map_err(|e| ServiceError::from(AppError::InvalidJson(e.to_string())))?;

        let action = envelope.action.unwrap_or_default();
        if action != CREATED_ACTION {
            debug!(action = %action, "Ignoring untracked action");
            return Ok(WebhookAck::ignored(format!("action {action} is not tracked")));
        }

        let payload: CommentCreatedPayload = serde_json::from_slice(delivery.body)
            .map_err(|e| ServiceError::validation(format!("invalid {} payload: {e}", event.as_str())))?;

        if !self.ctx.classifier().is_tracked(&payload.comment.body) {
            debug!(comment_id = %payload.comment.id, "Comment is not a tracked report");
            return Ok(WebhookAck::ignored("comment is not tracked"));
        }

        let comment = build_comment(event, payload)?;
        let id = comment.id;

        {
            let _guard = self.ctx.locks().lock(id).await;
            self.ctx.comment_repo().upsert(comment).await?;
        }

        if let Err(e) = self.ctx.comment_repo().save().await {
            warn!(error = %e, "Failed to persist store after ingest");
        }

        info!(comment_id = %id, "Tracking comment");
        Ok(WebhookAck::Tracked { comment_id: id })
    }
}

fn build_comment(event: CommentEvent, payload: CommentCreatedPayload) -> ServiceResult<TrackedComment> {
    let thread_id = payload.thread_number(event).ok_or_else(|| {
        ServiceError::validation(format!("{} payload has no thread number", event.as_str()))
    })?;

    let repository = RepositoryName::parse(&payload.repository.full_name)
        .map_err(|e| ServiceError::validation(e.to_string()))?;

    let comment = payload.comment;
    Ok(TrackedComment::new(
        comment.id,
        repository,
        thread_id,
        comment.user.login,
        comment.html_url,
        &comment.body,
        comment.created_at,
    )
    .with_kind(event.comment_kind()))
}
