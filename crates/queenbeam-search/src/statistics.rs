//! Per-search statistics.
//!
//! Counters and score progression for a single beam search invocation,
//! useful for debugging and for checking the engine's monotonicity
//! guarantee from the outside.

use queenbeam_core::ConflictScore;

/// Statistics for one `BeamSearch::search` call.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Number of expand-and-prune iterations performed.
    pub iterations: u64,
    /// Total successor boards generated and scored.
    pub boards_expanded: u64,
    /// Best beam score after initialization and after each iteration.
    ///
    /// Strictly decreasing except for the final entry: the search stops
    /// on the first iteration whose best fails to improve, and that last
    /// beam no longer contains its predecessor's champion, so the final
    /// score may equal or exceed the one before it.
    pub score_history: Vec<ConflictScore>,
}

impl SearchStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score observed so far, if any iteration has been recorded.
    pub fn best_score(&self) -> Option<ConflictScore> {
        self.score_history.last().copied()
    }
}
