//! Board dimensions and the set of starting holes worth searching

use crate::error::BoardError;
use crate::index::{TRIANGULAR, to_coords, triangular};
use std::ops::Range;

/// Smallest supported board
pub const MIN_ROWS: u8 = 5;
/// Largest supported board
pub const MAX_ROWS: u8 = 10;

/// Validated number of rows of a triangular board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    rows: u8,
}

impl BoardSize {
    /// Create a board size, rejecting anything outside `MIN_ROWS..=MAX_ROWS`
    pub fn new(rows: i64) -> Result<Self, BoardError> {
        if (i64::from(MIN_ROWS)..=i64::from(MAX_ROWS)).contains(&rows) {
            Ok(Self { rows: rows as u8 })
        } else {
            Err(BoardError::RowsOutOfRange {
                rows,
                min: MIN_ROWS,
                max: MAX_ROWS,
            })
        }
    }

    pub fn rows(self) -> usize {
        usize::from(self.rows)
    }

    /// Number of peg positions on the board
    pub fn total_pegs(self) -> usize {
        triangular(self.rows())
    }

    /// Rows of the apex region that covers every starting hole up to symmetry
    pub fn rows_to_check(self) -> usize {
        self.rows() / 2 + 1
    }

    /// Number of starting holes searched.
    ///
    /// Holes are taken in id order from the apex, so this is the triangular
    /// number of [`rows_to_check`](Self::rows_to_check). No symmetry
    /// deduplication happens inside that region.
    pub fn holes_to_check(self) -> usize {
        TRIANGULAR[self.rows_to_check()]
    }

    /// Starting hole ids to search, 0-indexed
    pub fn candidate_holes(self) -> Range<usize> {
        0..self.holes_to_check()
    }

    /// Whether a peg id lies on this board
    pub fn contains(self, id: usize) -> bool {
        let (row, displacement) = to_coords(id);
        row < self.rows() && displacement <= row
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardError;

    fn try_from(rows: i64) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}
