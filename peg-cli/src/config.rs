//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use peg_solver::{BoardSize, Objective};

/// Resolved runtime configuration
pub struct Config {
    /// Board dimensions
    pub size: BoardSize,
    /// Number of threads for the search pool
    pub thread_count: usize,
    /// What each search optimises
    pub objective: Objective,
    /// Whether to print per-hole statistics
    pub stats: bool,
    /// Log verbosity from repeated `-v`
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let size = BoardSize::new(i64::from(args.size))?;

        // One worker per starting hole unless told otherwise
        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "Thread count must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => size.holes_to_check(),
        };

        Ok(Config {
            size,
            thread_count,
            objective: args.objective.into(),
            stats: args.stats,
            verbosity: args.verbose,
        })
    }

    /// Default `env_logger` filter for the configured verbosity
    pub fn log_filter(&self) -> &'static str {
        log_filter(self.verbosity)
    }
}

/// Map `-v` count to a log level name
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
