//! Integration test utilities for the feedback service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a mocked GitHub upstream.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
