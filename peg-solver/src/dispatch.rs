//! Fan-out of one search per starting hole and fan-in of their results
//!
//! Every candidate hole gets its own [`SearchState`], searched as a separate
//! rayon job. Runs share nothing; each one sends a single [`SearchReport`]
//! over a channel when it finishes, and the dispatcher waits until every
//! launched run has reported before selecting a winner.

use crate::aggregate::{DispatchOutcome, ResultAggregator};
use crate::board::BoardSize;
use crate::error::{BoardError, DispatchError};
use crate::moves::Move;
use crate::solver::{Objective, solve};
use crate::state::{SearchState, SearchStats};
use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::ops::Range;
use std::sync::mpsc::{self, Sender};

/// Result of the search from one starting hole
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Starting hole, 0-indexed
    pub hole: usize,
    /// Pegs left at the best dead end
    pub best_remaining: usize,
    /// Jumps leading to that dead end, 1-indexed, in the order made
    pub best_path: Vec<Move>,
    pub stats: SearchStats,
    /// When the search started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When the search completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SearchReport {
    /// Starting hole as printed, 1-indexed
    pub fn hole_number(&self) -> usize {
        self.hole + 1
    }

    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Search a single state to completion and summarise it
pub fn run_search(mut state: SearchState) -> SearchReport {
    debug!(
        "hole {}: search started ({} pegs)",
        state.initial_hole() + 1,
        state.pegs_remaining()
    );
    let solve_start = Utc::now();
    solve(&mut state);
    let solve_end = Utc::now();

    SearchReport {
        hole: state.initial_hole(),
        best_remaining: state.best_remaining(),
        best_path: state.take_best_path(),
        stats: state.stats(),
        solve_start,
        solve_end,
    }
}

/// Runs one independent search per candidate starting hole
pub struct Dispatcher {
    size: BoardSize,
    objective: Objective,
    thread_pool: rayon::ThreadPool,
}

impl Dispatcher {
    /// Create a dispatcher.
    ///
    /// With no thread count, the pool gets one worker per candidate hole so
    /// every search runs at once.
    pub fn new(
        size: BoardSize,
        objective: Objective,
        threads: Option<usize>,
    ) -> Result<Self, DispatchError> {
        let threads = threads.unwrap_or_else(|| size.holes_to_check()).max(1);
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("peg-search-{}", idx))
            .build()
            .map_err(|e| DispatchError::ThreadPool(e.to_string()))?;

        Ok(Self {
            size,
            objective,
            thread_pool,
        })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Starting holes that will be searched, 0-indexed
    pub fn candidates(&self) -> Range<usize> {
        self.size.candidate_holes()
    }

    /// One fresh state per candidate hole
    pub fn build_states(&self) -> Result<Vec<SearchState>, BoardError> {
        self.candidates()
            .map(|hole| SearchState::new(self.size, hole, self.objective))
            .collect()
    }

    /// Search every candidate hole and select the winner
    pub fn run(&self) -> Result<DispatchOutcome, DispatchError> {
        let states = self.build_states()?;
        if states.is_empty() {
            return Err(DispatchError::NoCandidates);
        }
        let expected = states.len();
        info!(
            "searching {} starting holes on a {}-row board with {} threads ({:?})",
            expected,
            self.size.rows(),
            self.threads(),
            self.objective
        );

        let mut aggregator = ResultAggregator::new(states.iter().map(SearchState::initial_hole));
        let (tx, rx) = mpsc::channel();

        let fan_out_ok = std::thread::scope(|s| {
            let handle = s.spawn(move || self.fan_out(states, tx));

            for report in rx {
                debug!(
                    "hole {}: best dead end {} pegs, {} nodes, {} dead ends, {}ms",
                    report.hole_number(),
                    report.best_remaining,
                    report.stats.nodes,
                    report.stats.dead_ends,
                    report.duration().num_milliseconds()
                );
                let hole = report.hole;
                if !aggregator.add(report) {
                    warn!("ignoring unexpected report for hole {}", hole + 1);
                }
            }

            handle.join().is_ok()
        });

        if !fan_out_ok || !aggregator.is_complete() {
            return Err(DispatchError::Incomplete {
                expected,
                received: aggregator.received(),
            });
        }

        let outcome = aggregator
            .into_outcome(self.objective)
            .ok_or(DispatchError::NoCandidates)?;
        let winner = outcome.winner();
        info!(
            "selected hole {}: {} pegs left after {} jumps",
            winner.hole_number(),
            winner.best_remaining,
            winner.best_path.len()
        );
        Ok(outcome)
    }

    /// Launch every search on the pool, one job per state
    fn fan_out(&self, states: Vec<SearchState>, tx: Sender<SearchReport>) {
        self.thread_pool.install(|| {
            states
                .into_par_iter()
                .with_max_len(1)
                .for_each_with(tx, |tx, state| {
                    // The receiver lives until every sender is dropped
                    tx.send(run_search(state)).ok();
                });
        });
    }
}
