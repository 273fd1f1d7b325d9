//! Error types for Queenbeam

use thiserror::Error;

/// Main error type for Queenbeam operations.
///
/// Failing to find a solution is not an error: the engine reports that
/// outcome through its return value. Errors are reserved for degenerate
/// configurations and internal invariant breaks.
#[derive(Debug, Error)]
pub enum QueenbeamError {
    /// Degenerate search parameters (zero board size or beam width)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Queenbeam operations
pub type Result<T> = std::result::Result<T, QueenbeamError>;
