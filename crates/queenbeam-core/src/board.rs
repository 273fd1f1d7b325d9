//! Queen placement boards.

use std::fmt;

use rand::Rng;

/// A placement of N queens on an N×N board, one queen per column.
///
/// `row(c)` is the row occupied by the queen in column `c`. Exactly one
/// queen per column by construction; rows may repeat, so a board is not
/// necessarily a valid N-queens solution.
///
/// Boards are never mutated after creation: successor generation copies
/// the board before changing a single column.
///
/// # Examples
///
/// ```
/// use queenbeam_core::Board;
///
/// let board = Board::new(vec![1, 3, 0, 2]);
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.row(1), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board from explicit row assignments.
    pub fn new(rows: Vec<usize>) -> Self {
        debug_assert!(
            rows.iter().all(|&r| r < rows.len()),
            "row index out of range for board size"
        );
        Board { rows }
    }

    /// Generates a size-`n` board with each column's row drawn independently
    /// and uniformly from `0..n`.
    ///
    /// No constraints are enforced; duplicate rows and diagonal conflicts
    /// are allowed. The generator is injected so callers control seeding.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenbeam_core::Board;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Board::random(8, &mut rng);
    /// assert_eq!(board.size(), 8);
    /// assert!(board.rows().iter().all(|&r| r < 8));
    /// ```
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Board { rows }
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of the queen in `column`.
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Returns the row assignment for every column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Generates every board reachable by relocating exactly one queen
    /// within its column.
    ///
    /// Produces N×(N−1) boards in column-major, row-ascending order. Each
    /// successor is an independent copy that shares no storage with this
    /// board or with any other successor.
    pub fn successors(&self) -> Vec<Board> {
        let n = self.rows.len();
        let mut expansion = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));
        for column in 0..n {
            for row in 0..n {
                if row == self.rows[column] {
                    continue;
                }
                let mut successor = self.clone();
                successor.rows[column] = row;
                expansion.push(successor);
            }
        }
        expansion
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.rows)
    }
}
