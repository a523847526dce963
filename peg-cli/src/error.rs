//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Board construction error
    #[error("Board error: {0}")]
    Board(#[from] peg_solver::BoardError),

    /// Search dispatch error
    #[error("Search error: {0}")]
    Dispatch(#[from] peg_solver::DispatchError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
