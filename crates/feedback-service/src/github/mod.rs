//! GitHub REST client
//!
//! Implements the `ReactionSource` port against the issue comment
//! reactions endpoint.

mod client;
mod models;

pub use client::{GitHubClient, API_VERSION, MAX_PAGES, PER_PAGE, USER_AGENT};
pub use models::{RawReaction, RawUser, GHOST_USER};
