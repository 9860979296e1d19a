//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates the
//! domain ports for one group of operations.

pub mod context;
pub mod error;
pub mod query;
pub mod refresh;
pub mod webhook;

pub use context::{ServiceContext, ServiceContextBuilder, DEFAULT_BATCH_DELAY};
pub use error::{ServiceError, ServiceResult};
pub use query::QueryService;
pub use refresh::RefreshService;
pub use webhook::WebhookService;
