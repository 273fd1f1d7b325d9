//! ConflictScore - pairwise conflict counting for queen placements.

use std::cmp::Ordering;
use std::fmt;

use crate::board::Board;

/// The number of mutually attacking queen pairs on a board.
///
/// Lower is better; zero means a valid N-queens solution. Scores order
/// ascending by conflict count, so a sorted pool has the best candidate
/// first.
///
/// # Examples
///
/// ```
/// use queenbeam_core::ConflictScore;
///
/// let stuck = ConflictScore::of(3);
/// let solved = ConflictScore::ZERO;
///
/// assert!(solved < stuck);
/// assert!(solved.is_goal());
/// assert!(!stuck.is_goal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConflictScore {
    conflicts: u32,
}

impl ConflictScore {
    /// The goal score: no two queens attack each other.
    pub const ZERO: ConflictScore = ConflictScore { conflicts: 0 };

    /// Creates a score with the given conflict count.
    #[inline]
    pub const fn of(conflicts: u32) -> Self {
        ConflictScore { conflicts }
    }

    /// Returns the conflict count.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.conflicts
    }

    /// Returns true if this is a zero-conflict (goal) score.
    #[inline]
    pub const fn is_goal(&self) -> bool {
        self.conflicts == 0
    }
}

impl Ord for ConflictScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.conflicts.cmp(&other.conflicts)
    }
}

impl PartialOrd for ConflictScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ConflictScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConflictScore({})", self.conflicts)
    }
}

impl fmt::Display for ConflictScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.conflicts)
    }
}

/// Counts the conflicting queen pairs on `board`.
///
/// Every unordered pair of columns is checked once, treating queens as
/// (column, row) points. A pair conflicts on a shared row or on either
/// diagonal; shared columns cannot occur because the board holds one queen
/// per column. Pure function: O(N²), deterministic, no side effects.
///
/// # Examples
///
/// ```
/// use queenbeam_core::{score, Board, ConflictScore};
///
/// // A known 4-queens solution.
/// assert_eq!(score(&Board::new(vec![1, 3, 0, 2])), ConflictScore::ZERO);
///
/// // Four queens on one row: every pair conflicts.
/// assert_eq!(score(&Board::new(vec![0, 0, 0, 0])), ConflictScore::of(6));
/// ```
pub fn score(board: &Board) -> ConflictScore {
    let rows = board.rows();
    let mut conflicts = 0u32;
    for c1 in 0..rows.len() {
        for c2 in (c1 + 1)..rows.len() {
            if attacks(c1, rows[c1], c2, rows[c2]) {
                conflicts += 1;
            }
        }
    }
    ConflictScore::of(conflicts)
}

/// Returns true if queens at (x1, y1) and (x2, y2) attack each other.
///
/// Requires x1 < x2, so dx is always positive and the column case never
/// fires here.
fn attacks(x1: usize, y1: usize, x2: usize, y2: usize) -> bool {
    let dx = x2 as i64 - x1 as i64;
    let dy = y2 as i64 - y1 as i64;
    dy == 0 || dx == dy || dx == -dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution_scores_zero() {
        assert_eq!(score(&Board::new(vec![1, 3, 0, 2])), ConflictScore::ZERO);
        assert_eq!(score(&Board::new(vec![2, 0, 3, 1])), ConflictScore::ZERO);
    }

    #[test]
    fn test_shared_row_conflicts() {
        // All four queens share row 0: C(4,2) pairs.
        assert_eq!(score(&Board::new(vec![0, 0, 0, 0])), ConflictScore::of(6));
    }

    #[test]
    fn test_shared_diagonal_conflicts() {
        // Main diagonal: every pair conflicts.
        assert_eq!(score(&Board::new(vec![0, 1, 2, 3])), ConflictScore::of(6));
        // Anti-diagonal likewise.
        assert_eq!(score(&Board::new(vec![3, 2, 1, 0])), ConflictScore::of(6));
    }

    #[test]
    fn test_partial_conflicts() {
        // (0,0)-(3,3) share a diagonal and (1,2)-(2,1) share a diagonal.
        assert_eq!(score(&Board::new(vec![0, 2, 1, 3])), ConflictScore::of(2));
    }

    #[test]
    fn test_degenerate_sizes() {
        // A single queen has no pairs to conflict.
        assert_eq!(score(&Board::new(vec![0])), ConflictScore::ZERO);
        // Two queens always attack on a 2x2 board.
        for rows in [[0, 0], [0, 1], [1, 0], [1, 1]] {
            assert!(!score(&Board::new(rows.to_vec())).is_goal());
        }
    }

    #[test]
    fn test_score_ordering() {
        assert!(ConflictScore::ZERO < ConflictScore::of(1));
        assert!(ConflictScore::of(2) < ConflictScore::of(5));
        assert_eq!(ConflictScore::of(3), ConflictScore::of(3));
    }
}
