//! Stats calculator
//!
//! Pure functions deriving per-comment and global feedback metrics from
//! classified reactions. Nothing here touches storage or the clock.

use crate::entities::{GlobalStats, Reaction, ReactionSentiment, Stats, TrackedComment};

/// Compute statistics for one comment's reactions
pub fn calculate(reactions: &[Reaction]) -> Stats {
    let mut stats = Stats::default();

    for reaction in reactions {
        stats.total += 1;
        match reaction.sentiment() {
            ReactionSentiment::Positive => stats.positive += 1,
            ReactionSentiment::Negative => stats.negative += 1,
            ReactionSentiment::Neutral => {}
        }
    }

    stats.satisfaction = percentage(stats.positive, stats.total);
    stats
}

/// Aggregate statistics across tracked comments
///
/// Comments that were never fetched contribute to `total_comments` only.
pub fn aggregate<'a, I>(comments: I) -> GlobalStats
where
    I: IntoIterator<Item = &'a TrackedComment>,
{
    let mut global = GlobalStats::default();

    for comment in comments {
        global.total_comments += 1;

        let Some(stats) = comment.stats else {
            continue;
        };

        if stats.has_reactions() {
            global.comments_with_reactions += 1;
        }
        global.total_reactions += stats.total;
        global.positive_reactions += stats.positive;
        global.negative_reactions += stats.negative;
    }

    global.overall_satisfaction = percentage(global.positive_reactions, global.total_reactions);
    global.engagement_rate = percentage(global.comments_with_reactions, global.total_comments);
    global
}

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0
pub fn percentage(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u128::from(part.min(whole));
    let whole = u128::from(whole);
    // (200p + w) / 2w == floor(100p/w + 1/2)
    ((200 * part + whole) / (2 * whole)) as u8
}
