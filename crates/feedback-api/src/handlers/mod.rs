//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod feedback;
pub mod health;
pub mod refresh;
pub mod webhook;
