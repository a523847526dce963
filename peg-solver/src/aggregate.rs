//! Collects per-hole search reports and picks the winner
//!
//! Reports arrive in whatever order the runs finish. They are keyed by
//! starting hole so that selection always scans holes in id order and ties
//! go to the lowest hole.

use crate::dispatch::SearchReport;
use crate::solver::Objective;
use std::collections::{BTreeMap, BTreeSet};

/// Index of the winning score, scanning left to right.
///
/// A later score replaces the current pick only if it is strictly better
/// under `objective`, so the first of several equal scores wins.
pub fn select_winner(scores: &[usize], objective: Objective) -> Option<usize> {
    let mut winner: Option<usize> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match winner {
            Some(best) if !objective.improves(score, scores[best]) => {}
            _ => winner = Some(idx),
        }
    }
    winner
}

/// All reports of a finished dispatch, in hole order
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    reports: Vec<SearchReport>,
    winner: usize,
}

impl DispatchOutcome {
    /// The selected run
    pub fn winner(&self) -> &SearchReport {
        &self.reports[self.winner]
    }

    /// Every run, ordered by starting hole
    pub fn reports(&self) -> &[SearchReport] {
        &self.reports
    }

    pub fn into_winner(mut self) -> SearchReport {
        self.reports.swap_remove(self.winner)
    }
}

/// Aggregator that tracks outstanding runs and buffers their reports
pub struct ResultAggregator {
    /// Holes still waiting for a report
    expected: BTreeSet<usize>,
    /// Reports received so far, keyed by hole
    received: BTreeMap<usize, SearchReport>,
}

impl ResultAggregator {
    /// Create aggregator from the starting holes that were launched
    pub fn new(expected_holes: impl IntoIterator<Item = usize>) -> Self {
        Self {
            expected: expected_holes.into_iter().collect(),
            received: BTreeMap::new(),
        }
    }

    /// Record a report.
    ///
    /// Returns `false` for a hole that was never launched or already
    /// reported; such reports are dropped.
    pub fn add(&mut self, report: SearchReport) -> bool {
        if !self.expected.remove(&report.hole) {
            return false;
        }
        self.received.insert(report.hole, report);
        true
    }

    /// Check if every launched run has reported
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }

    /// Number of reports received
    pub fn received(&self) -> usize {
        self.received.len()
    }

    /// Number of runs still outstanding
    pub fn outstanding(&self) -> usize {
        self.expected.len()
    }

    /// Pick the winner among received reports, `None` if there are none
    pub fn into_outcome(self, objective: Objective) -> Option<DispatchOutcome> {
        let reports: Vec<SearchReport> = self.received.into_values().collect();
        let scores: Vec<usize> = reports.iter().map(|r| r.best_remaining).collect();
        let winner = select_winner(&scores, objective)?;
        Some(DispatchOutcome { reports, winner })
    }
}
