//! # feedback-store
//!
//! Record store implementing the `CommentRepository` port on top of a single
//! JSON file.
//!
//! ## Overview
//!
//! - An insertion-ordered in-memory table that is authoritative while the
//!   process runs
//! - On-disk models with serde derives and entity ↔ model mappers
//! - Whole-table snapshots written through a temporary file and a rename
//! - Per-id mutation locks for read-modify-write sequences
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feedback_store::JsonFileCommentRepository;
//! use feedback_core::traits::CommentRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = JsonFileCommentRepository::open("./data/feedback-data.json").await;
//!     println!("{} tracked comments", repo.count().await?);
//!     repo.save().await?;
//!     Ok(())
//! }
//! ```

pub mod locks;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use locks::CommentLocks;
pub use repositories::{JsonFileCommentRepository, StoreError};
