//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use peg_solver::Objective;

/// What each search optimises and how the winning hole is picked
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ObjectiveArg {
    /// Keep the dead end with the most pegs left; report the hole that leaves the most (default)
    #[default]
    MostRemaining,
    /// Keep the dead end with the fewest pegs left; report the hole that leaves the fewest
    FewestRemaining,
}

impl From<ObjectiveArg> for Objective {
    fn from(arg: ObjectiveArg) -> Self {
        match arg {
            ObjectiveArg::MostRemaining => Objective::MostRemaining,
            ObjectiveArg::FewestRemaining => Objective::FewestRemaining,
        }
    }
}

/// Triangular peg solitaire solver
#[derive(Parser, Debug)]
#[command(
    name = "pegs",
    about = "Search every starting hole of a triangular peg solitaire board",
    version,
    arg_required_else_help = true
)]
pub struct Args {
    /// Number of rows on the board, between 5 and 10 inclusive
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(5..=10))]
    pub size: u8,

    /// Number of worker threads (defaults to one per starting hole searched)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Search objective: most-remaining or fewest-remaining
    #[arg(long, value_enum, default_value = "most-remaining")]
    pub objective: ObjectiveArg,

    /// Print per-hole search statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
