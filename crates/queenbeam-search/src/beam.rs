//! The beam: a bounded, score-ordered set of candidate boards.

use queenbeam_core::{score, Board, ConflictScore};

/// A board paired with its conflict score.
///
/// Scored once on creation and immutable afterwards; a superseded candidate
/// is simply dropped with the beam that held it.
#[derive(Clone, Debug)]
pub struct ScoredBoard {
    board: Board,
    score: ConflictScore,
}

impl ScoredBoard {
    /// Scores `board` and pairs it with the result.
    pub fn new(board: Board) -> Self {
        let score = score(&board);
        ScoredBoard { board, score }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the conflict score.
    pub fn score(&self) -> ConflictScore {
        self.score
    }

    /// Consumes the pair, returning the board.
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// An ordered sequence of at most `width` scored boards, best first.
///
/// Each search iteration builds a fresh beam from the successor pool of the
/// previous one; beams are never merged.
#[derive(Debug)]
pub struct Beam {
    candidates: Vec<ScoredBoard>,
}

impl Beam {
    /// Builds a beam from a candidate pool.
    ///
    /// The pool is stably sorted ascending by score and truncated to
    /// `width` entries. Ties keep their pool order, so on equal scores the
    /// first-generated candidate wins.
    ///
    /// # Example
    ///
    /// ```
    /// use queenbeam_core::Board;
    /// use queenbeam_search::{Beam, ScoredBoard};
    ///
    /// let pool = vec![
    ///     ScoredBoard::new(Board::new(vec![0, 0, 0, 0])), // 6 conflicts
    ///     ScoredBoard::new(Board::new(vec![1, 3, 0, 2])), // solved
    ///     ScoredBoard::new(Board::new(vec![0, 2, 1, 3])), // 2 conflicts
    /// ];
    /// let beam = Beam::from_pool(pool, 2);
    /// assert_eq!(beam.len(), 2);
    /// assert!(beam.best().unwrap().score().is_goal());
    /// ```
    pub fn from_pool(mut pool: Vec<ScoredBoard>, width: usize) -> Self {
        // Vec::sort_by_key is stable, which is what pins the tie-break.
        pool.sort_by_key(|candidate| candidate.score());
        pool.truncate(width);
        Beam { candidates: pool }
    }

    /// Returns the best-scoring candidate, if any.
    pub fn best(&self) -> Option<&ScoredBoard> {
        self.candidates.first()
    }

    /// Returns the number of retained candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if the beam holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterates over the candidates in score order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredBoard> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pool_sorts_ascending_and_truncates() {
        let pool = vec![
            ScoredBoard::new(Board::new(vec![0, 1, 2, 3])), // 6
            ScoredBoard::new(Board::new(vec![0, 2, 1, 3])), // 2
            ScoredBoard::new(Board::new(vec![1, 3, 0, 2])), // 0
            ScoredBoard::new(Board::new(vec![0, 0, 0, 0])), // 6
        ];
        let beam = Beam::from_pool(pool, 3);

        assert_eq!(beam.len(), 3);
        let scores: Vec<u32> = beam.iter().map(|c| c.score().count()).collect();
        assert_eq!(scores, vec![0, 2, 6]);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        // All 2x2 boards score exactly one conflict.
        let pool = vec![
            ScoredBoard::new(Board::new(vec![0, 0])),
            ScoredBoard::new(Board::new(vec![0, 1])),
            ScoredBoard::new(Board::new(vec![1, 0])),
        ];
        let beam = Beam::from_pool(pool, 2);

        assert_eq!(beam.best().unwrap().board(), &Board::new(vec![0, 0]));
        let retained: Vec<&Board> = beam.iter().map(|c| c.board()).collect();
        assert_eq!(retained[1], &Board::new(vec![0, 1]));
    }

    #[test]
    fn test_width_larger_than_pool_keeps_everything() {
        let pool = vec![ScoredBoard::new(Board::new(vec![0, 2, 1, 3]))];
        let beam = Beam::from_pool(pool, 50);
        assert_eq!(beam.len(), 1);
    }

    #[test]
    fn test_empty_pool_gives_empty_beam() {
        let beam = Beam::from_pool(Vec::new(), 4);
        assert!(beam.is_empty());
        assert!(beam.best().is_none());
    }
}
