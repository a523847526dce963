//! Exhaustive backtracking search over one board

use crate::moves::{Direction, Jump, apply, reverse, validate};
use crate::state::SearchState;
use log::trace;

/// What a search tries to optimise at its dead ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Keep the dead end with the most pegs left, and report the starting
    /// hole whose best dead end leaves the most
    #[default]
    MostRemaining,
    /// Keep the dead end with the fewest pegs left, and report the starting
    /// hole whose best dead end leaves the fewest
    FewestRemaining,
}

impl Objective {
    /// Best-so-far value meaning "nothing recorded yet"
    pub const fn initial_best(self) -> usize {
        match self {
            Objective::MostRemaining => 0,
            Objective::FewestRemaining => usize::MAX,
        }
    }

    /// Whether a dead end leaving `candidate` pegs beats `best`
    pub const fn improves(self, candidate: usize, best: usize) -> bool {
        match self {
            Objective::MostRemaining => candidate > best,
            Objective::FewestRemaining => candidate < best,
        }
    }

    /// Whether any dead end below a position with `pegs_remaining` pegs could
    /// still beat `best`.
    ///
    /// Jumps only ever remove pegs, so every dead end below the position
    /// leaves between 1 and `pegs_remaining` pegs.
    pub const fn can_improve(self, pegs_remaining: usize, best: usize) -> bool {
        match self {
            Objective::MostRemaining => pegs_remaining > best,
            Objective::FewestRemaining => best > 1,
        }
    }
}

/// Run a full search from the state's current position.
///
/// On return the board is back where it started and the best dead end found
/// is in [`SearchState::best_remaining`] and [`SearchState::best_path`].
pub fn solve(state: &mut SearchState) {
    explore(state);
    debug_assert!(state.path.is_empty());
}

/// Explore every jump sequence from the current position, skipping subtrees
/// that cannot beat the best dead end already recorded.
pub fn explore(state: &mut SearchState) {
    if !state
        .objective()
        .can_improve(state.pegs_remaining, state.best_remaining)
    {
        return;
    }
    state.stats.nodes += 1;

    // Every peg is tried even after a jump is found; each branch is undone
    // before the next peg is looked at
    let mut any_move = false;
    for id in 0..state.total_pegs() {
        if state.occupancy[id] {
            any_move |= try_neighbor_jumps(state, id);
        }
    }

    if !any_move {
        state.stats.dead_ends += 1;
        if state
            .objective()
            .improves(state.pegs_remaining, state.best_remaining)
        {
            state.best_remaining = state.pegs_remaining;
            state.best_path = state.path.clone();
            trace!(
                "hole {}: new best dead end with {} pegs after {} jumps",
                state.initial_hole() + 1,
                state.best_remaining,
                state.best_path.len()
            );
        }
    }
}

/// Try all six jumps from peg `id`, recursing into each legal one.
///
/// Returns whether any of them was legal.
fn try_neighbor_jumps(state: &mut SearchState, id: usize) -> bool {
    let mut any_move = false;
    for direction in Direction::ALL {
        if let Some(jump) = Jump::toward(id, direction)
            && validate(state, &jump)
        {
            apply(state, &jump);
            explore(state);
            reverse(state, &jump);
            any_move = true;
        }
    }
    any_move
}
