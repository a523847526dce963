//! Mutable state of one independent search

use crate::board::BoardSize;
use crate::error::BoardError;
use crate::moves::Move;
use crate::solver::Objective;

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions that passed the pruning test
    pub nodes: u64,
    /// Positions with no legal jump
    pub dead_ends: u64,
}

/// Board and bookkeeping owned by exactly one search run
///
/// Holds the occupancy of every peg position, the live path of jumps that led
/// to it, and the best dead end recorded so far. The solver mutates it only
/// through paired apply/reverse calls, so once a search returns the board is
/// back to its starting position and `path` is empty.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub(crate) occupancy: Vec<bool>,
    initial_hole: usize,
    size: BoardSize,
    pub(crate) pegs_remaining: usize,
    pub(crate) best_remaining: usize,
    pub(crate) best_path: Vec<Move>,
    pub(crate) path: Vec<Move>,
    objective: Objective,
    pub(crate) stats: SearchStats,
}

impl SearchState {
    /// Full board with a single hole at `initial_hole` (0-indexed)
    pub fn new(
        size: BoardSize,
        initial_hole: usize,
        objective: Objective,
    ) -> Result<Self, BoardError> {
        let total = size.total_pegs();
        if initial_hole >= total {
            return Err(BoardError::HoleOutOfRange {
                hole: initial_hole,
                total,
            });
        }

        let mut occupancy = vec![true; total];
        occupancy[initial_hole] = false;

        Ok(Self {
            occupancy,
            initial_hole,
            size,
            pegs_remaining: total - 1,
            best_remaining: objective.initial_best(),
            best_path: Vec::new(),
            path: Vec::with_capacity(total),
            objective,
            stats: SearchStats::default(),
        })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows()
    }

    pub fn total_pegs(&self) -> usize {
        self.occupancy.len()
    }

    /// Starting hole, 0-indexed
    pub fn initial_hole(&self) -> usize {
        self.initial_hole
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn occupancy(&self) -> &[bool] {
        &self.occupancy
    }

    pub fn is_occupied(&self, id: usize) -> bool {
        self.occupancy[id]
    }

    pub fn pegs_remaining(&self) -> usize {
        self.pegs_remaining
    }

    /// Pegs left at the best dead end recorded so far
    pub fn best_remaining(&self) -> usize {
        self.best_remaining
    }

    /// Jumps leading to the best dead end, in the order they were made
    pub fn best_path(&self) -> &[Move] {
        &self.best_path
    }

    /// Jumps applied to reach the current position
    pub fn path(&self) -> &[Move] {
        &self.path
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Whether any dead end has been recorded
    pub fn has_result(&self) -> bool {
        self.best_remaining != self.objective.initial_best()
    }

    /// Population count of the occupancy array
    pub fn peg_count(&self) -> usize {
        self.occupancy.iter().filter(|&&peg| peg).count()
    }

    /// Whether the board is back at its starting position
    pub fn is_initial(&self) -> bool {
        self.path.is_empty()
            && self
                .occupancy
                .iter()
                .enumerate()
                .all(|(id, &peg)| peg == (id != self.initial_hole))
    }

    /// Take the recorded best path, leaving an empty one behind
    pub fn take_best_path(&mut self) -> Vec<Move> {
        std::mem::take(&mut self.best_path)
    }
}
