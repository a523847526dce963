//! Triangular Peg Solitaire Solver
//!
//! Exhaustive backtracking search for the triangular peg solitaire puzzle on
//! boards of 5 to 10 rows. A board starts full except for one hole; a jump
//! moves a peg over an adjacent peg into an empty slot two positions away and
//! removes the jumped peg. Searching stops at dead ends, positions with no
//! legal jump.
//!
//! # Overview
//!
//! This library provides:
//! - Peg numbering on the triangular grid ([`index`])
//! - Validated board sizes and the starting holes worth searching ([`BoardSize`])
//! - Jump validation with apply/reverse backtracking ([`moves`])
//! - The per-hole search state and recursive solver ([`SearchState`], [`solve`])
//! - A dispatcher that searches every candidate hole in parallel and selects
//!   a winner ([`Dispatcher`])
//!
//! # Quick Example
//!
//! ```
//! use peg_solver::{BoardSize, Objective, SearchState, solve};
//!
//! let size = BoardSize::new(5).unwrap();
//! let mut state = SearchState::new(size, 0, Objective::FewestRemaining).unwrap();
//! solve(&mut state);
//!
//! assert_eq!(state.best_remaining(), 1);
//! assert_eq!(state.best_path().len(), 13);
//! ```
//!
//! # Selection
//!
//! By default ([`Objective::MostRemaining`]) each search keeps the dead end
//! that leaves the most pegs, and the dispatcher reports the starting hole
//! whose best dead end leaves the most. [`Objective::FewestRemaining`] flips
//! both comparisons. Ties always go to the lowest-numbered hole.

pub mod aggregate;
pub mod board;
pub mod dispatch;
mod error;
pub mod index;
pub mod moves;
pub mod solver;
mod state;

// Re-export public API
pub use aggregate::{DispatchOutcome, ResultAggregator, select_winner};
pub use board::{BoardSize, MAX_ROWS, MIN_ROWS};
pub use dispatch::{Dispatcher, SearchReport, run_search};
pub use error::{BoardError, DispatchError};
pub use moves::{Direction, Jump, Move};
pub use solver::{Objective, solve};
pub use state::{SearchState, SearchStats};
