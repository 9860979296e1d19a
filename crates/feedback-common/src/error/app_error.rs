//! Application error types
//!
//! Failures raised below the service layer, before a request reaches
//! business logic or while the server is starting.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid or missing webhook signature")]
    InvalidSignature,

    // Validation errors
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidJson(_) => 400,
            Self::InvalidSignature => 401,
            Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
