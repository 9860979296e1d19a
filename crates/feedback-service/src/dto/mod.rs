//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Webhook delivery and payload shapes
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod webhook;

pub use requests::{UpdateAllRequest, UpdateReactionsRequest};

pub use responses::{
    BatchSummaryResponse, CommentListResponse, CommentResponse, CommentSummaryResponse,
    GlobalStatsResponse, HealthResponse, ReactionResponse, StatsResponse, WebhookAck,
};

pub use webhook::{
    CommentCreatedPayload, CommentEvent, WebhookDelivery, DELIVERY_HEADER, EVENT_HEADER,
};
