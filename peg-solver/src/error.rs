//! Error types for the solver library

use thiserror::Error;

/// Error type for board construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Row count outside the supported range
    #[error("Board must have between {min} and {max} rows, got {rows}")]
    RowsOutOfRange { rows: i64, min: u8, max: u8 },
    /// Starting hole is not a peg position on the board
    #[error("Starting hole {hole} is outside a board of {total} pegs")]
    HoleOutOfRange { hole: usize, total: usize },
}

/// Error type for the parallel search dispatcher
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),
    /// Some runs never reported back
    #[error("Only {received} of {expected} searches reported a result")]
    Incomplete { expected: usize, received: usize },
    /// Nothing to search
    #[error("No starting holes to search")]
    NoCandidates,
    /// Building a search state failed
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}
