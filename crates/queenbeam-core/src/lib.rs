//! Queenbeam Core - Board model and conflict scoring for N-queens
//!
//! This crate provides the fundamental types for the beam search engine:
//! - `Board` for queen placements (one queen per column)
//! - `ConflictScore` and the pairwise conflict counter
//! - The shared error type

pub mod board;
pub mod error;
pub mod score;

pub use board::Board;
pub use error::{QueenbeamError, Result};
pub use score::{score, ConflictScore};
