//! Derived feedback metrics

/// Per-comment reaction statistics
///
/// Always recomputed from the comment's reactions, never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
    /// Percentage of reactions that are positive (0-100)
    pub satisfaction: u8,
}

impl Stats {
    /// Reactions that are neither positive nor negative
    #[inline]
    pub fn neutral(&self) -> u64 {
        self.total - self.positive - self.negative
    }

    /// Whether at least one reaction was counted
    #[inline]
    pub fn has_reactions(&self) -> bool {
        self.total > 0
    }
}

/// Aggregate across every tracked comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalStats {
    pub total_comments: u64,
    pub comments_with_reactions: u64,
    pub total_reactions: u64,
    pub positive_reactions: u64,
    pub negative_reactions: u64,
    pub overall_satisfaction: u8,
    pub engagement_rate: u8,
}
