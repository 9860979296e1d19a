//! # feedback-common
//!
//! Shared utilities including configuration, error handling, webhook signature
//! verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{SignatureVerifier, SIGNATURE_HEADER};
pub use config::{
    AppConfig, AppSettings, BatchConfig, ClassifierConfig, ConfigError, CorsConfig, Environment,
    GitHubConfig, ServerConfig, StorageConfig, WebhookConfig,
};
pub use error::AppError;
pub use telemetry::{try_init_tracing_with_config, TracingConfig, TracingError};
