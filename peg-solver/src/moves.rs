//! Jump generation, validation, and apply/reverse on a search state

use crate::board::BoardSize;
use crate::index::{to_coords, to_id};
use crate::solver::Objective;
use crate::state::SearchState;
use std::fmt;

/// A recorded jump, 1-indexed as printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    /// Build a move from 0-indexed peg ids
    pub fn from_ids(from: usize, to: usize) -> Self {
        Self {
            from: from + 1,
            to: to + 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// The six jump directions on a triangular grid, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpRight,
    Right,
    DownRight,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Row/displacement offsets of the landing hole and of the jumped peg
    pub const fn offsets(self) -> ((isize, isize), (isize, isize)) {
        match self {
            Direction::UpRight => ((-2, 0), (-1, 0)),
            Direction::Right => ((0, 2), (0, 1)),
            Direction::DownRight => ((2, 2), (1, 1)),
            Direction::DownLeft => ((2, 0), (1, 0)),
            Direction::Left => ((0, -2), (0, -1)),
            Direction::UpLeft => ((-2, -2), (-1, -1)),
        }
    }
}

/// Candidate jump between 0-indexed peg ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    pub from: usize,
    pub over: usize,
    pub to: usize,
}

impl Jump {
    /// Jump from `from` in `direction`.
    ///
    /// `None` when the landing hole or the jumped peg has no id at all
    /// (negative coordinates, or past the end of a row). A `Some` jump may
    /// still land off the active board; [`validate`] rejects those.
    pub fn toward(from: usize, direction: Direction) -> Option<Self> {
        let (row, displacement) = to_coords(from);
        let (row, displacement) = (row as isize, displacement as isize);
        let ((land_row, land_disp), (over_row, over_disp)) = direction.offsets();

        let to = to_id(row + land_row, displacement + land_disp)?;
        let over = to_id(row + over_row, displacement + over_disp)?;
        Some(Self { from, over, to })
    }

    pub fn as_move(self) -> Move {
        Move::from_ids(self.from, self.to)
    }
}

/// Whether `jump` is legal on the current board.
///
/// The landing hole must be on the board before occupancy is consulted, so
/// ids past the active rows never index the occupancy array.
pub fn validate(state: &SearchState, jump: &Jump) -> bool {
    if !state.size().contains(jump.to) {
        return false;
    }
    state.occupancy[jump.from] && !state.occupancy[jump.to] && state.occupancy[jump.over]
}

/// Make a validated jump and push it onto the path
pub fn apply(state: &mut SearchState, jump: &Jump) {
    debug_assert!(validate(state, jump), "applying illegal jump {:?}", jump);
    state.occupancy[jump.from] = false;
    state.occupancy[jump.to] = true;
    state.occupancy[jump.over] = false;
    state.pegs_remaining -= 1;
    state.path.push(jump.as_move());
}

/// Undo the most recently applied jump
pub fn reverse(state: &mut SearchState, jump: &Jump) {
    debug_assert_eq!(state.path.last(), Some(&jump.as_move()));
    state.occupancy[jump.from] = true;
    state.occupancy[jump.to] = false;
    state.occupancy[jump.over] = true;
    state.pegs_remaining += 1;
    state.path.pop();
}

/// Every legal jump on the current board, pegs in id order and directions in
/// [`Direction::ALL`] order
pub fn legal_jumps(state: &SearchState) -> Vec<Jump> {
    (0..state.total_pegs())
        .filter(|&id| state.occupancy[id])
        .flat_map(|id| Direction::ALL.into_iter().filter_map(move |d| Jump::toward(id, d)))
        .filter(|jump| validate(state, jump))
        .collect()
}

/// Replay a 1-indexed path from a board with a single hole at `initial_hole`.
///
/// Returns the resulting state, or `None` if any move is not a legal jump at
/// the point it is made.
pub fn replay(size: BoardSize, initial_hole: usize, path: &[Move]) -> Option<SearchState> {
    let mut state = SearchState::new(size, initial_hole, Objective::default()).ok()?;
    for mv in path {
        let from = mv.from.checked_sub(1)?;
        let to = mv.to.checked_sub(1)?;
        if from >= state.total_pegs() {
            return None;
        }
        let jump = Direction::ALL
            .into_iter()
            .filter_map(|d| Jump::toward(from, d))
            .find(|jump| jump.to == to)?;
        if !validate(&state, &jump) {
            return None;
        }
        apply(&mut state, &jump);
    }
    Some(state)
}
