//! Domain entities - core business objects

mod reaction;
mod stats;
mod tracked_comment;

pub use reaction::{Reaction, ReactionSentiment, NEGATIVE_REACTIONS, POSITIVE_REACTIONS};
pub use stats::{GlobalStats, Stats};
pub use tracked_comment::{body_preview, TrackedComment, BODY_PREVIEW_CHARS};
