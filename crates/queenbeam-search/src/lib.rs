//! Queenbeam Search - local beam search engine for N-queens
//!
//! The engine keeps a bounded beam of candidate boards, repeatedly expands
//! every candidate by relocating single queens, and prunes the pooled
//! successors back down to the beam width. It stops when a zero-conflict
//! board appears or when the best score stops improving (a local optimum).
//!
//! Failure to solve is a normal outcome, not an error: the search is a
//! heuristic with no completeness guarantee.
//!
//! # Example
//!
//! ```
//! use queenbeam_search::BeamSearch;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let search = BeamSearch::new(8, 10).unwrap();
//! let result = search.search(&mut rng).unwrap();
//! // The best score strictly improves on every iteration but the last,
//! // which is where the search either reaches the goal or stalls.
//! let history = &result.statistics.score_history;
//! let improving = &history[..history.len() - 1];
//! assert!(improving.windows(2).all(|w| w[1] < w[0]));
//! ```

pub mod beam;
pub mod engine;
pub mod statistics;

pub use beam::{Beam, ScoredBoard};
pub use engine::{run_search, run_search_with, BeamSearch, SearchOutcome, SearchResult};
pub use statistics::SearchStatistics;
