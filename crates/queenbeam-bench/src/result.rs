//! Sweep result types.

/// Aggregated outcomes for a single beam width.
#[derive(Debug, Clone)]
pub struct WidthResult {
    /// The beam width these counts belong to.
    pub beam_width: usize,
    /// Searches that reached a zero-conflict board.
    pub successes: u64,
    /// Total searches attempted.
    pub attempts: u64,
}

impl WidthResult {
    /// Creates an empty tally for `beam_width`.
    pub fn new(beam_width: usize) -> Self {
        WidthResult {
            beam_width,
            successes: 0,
            attempts: 0,
        }
    }

    /// Records one search outcome.
    pub fn record(&mut self, solved: bool) {
        self.attempts += 1;
        if solved {
            self.successes += 1;
        }
    }

    /// Fraction of attempts that found a solution.
    ///
    /// # Example
    ///
    /// ```
    /// use queenbeam_bench::WidthResult;
    ///
    /// let mut tally = WidthResult::new(10);
    /// tally.record(true);
    /// tally.record(false);
    /// tally.record(true);
    /// tally.record(true);
    ///
    /// assert!((tally.success_rate() - 0.75).abs() < 1e-9);
    /// ```
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.successes as f64 / self.attempts as f64
        }
    }
}

/// Results of a complete sweep across beam widths.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Board size every search used.
    pub board_size: usize,
    /// Per-width tallies, in sweep order.
    pub widths: Vec<WidthResult>,
}

impl SweepResult {
    /// Creates an empty result for `board_size`.
    pub fn new(board_size: usize) -> Self {
        SweepResult {
            board_size,
            widths: Vec::new(),
        }
    }

    /// Appends a completed width tally.
    pub fn push(&mut self, width: WidthResult) {
        self.widths.push(width);
    }

    /// Returns the width with the highest success rate, if any.
    pub fn best_width(&self) -> Option<&WidthResult> {
        self.widths.iter().max_by(|a, b| {
            a.success_rate()
                .partial_cmp(&b.success_rate())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally_rate_is_zero() {
        assert_eq!(WidthResult::new(1).success_rate(), 0.0);
    }

    #[test]
    fn test_record_counts_attempts_and_successes() {
        let mut tally = WidthResult::new(5);
        for solved in [true, false, false, true] {
            tally.record(solved);
        }
        assert_eq!(tally.attempts, 4);
        assert_eq!(tally.successes, 2);
        assert!((tally.success_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_best_width() {
        let mut result = SweepResult::new(8);
        assert!(result.best_width().is_none());

        let mut low = WidthResult::new(1);
        low.record(false);
        low.record(true);
        let mut high = WidthResult::new(50);
        high.record(true);
        high.record(true);

        result.push(low);
        result.push(high);
        assert_eq!(result.best_width().unwrap().beam_width, 50);
    }
}
