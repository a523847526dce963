//! Peg numbering on a triangular grid
//!
//! Pegs are numbered row by row from the apex, so row `r` holds ids
//! `T[r] ..= T[r] + r` where `T[r] = r(r+1)/2`.
//!
//! ```text
//!         0
//!       1   2
//!     3   4   5
//!   6   7   8   9
//! ```

/// Number of rows covered by [`TRIANGULAR`]
pub const TABLE_ROWS: usize = 18;

/// `TRIANGULAR[r]` is the number of pegs in the rows above row `r`.
///
/// Covers more rows than the largest board so that jumps probing two rows
/// past the bottom edge still resolve to an id.
pub const TRIANGULAR: [usize; TABLE_ROWS] = [
    0, 1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78, 91, 105, 120, 136, 153,
];

/// Triangular number `n(n+1)/2`
pub const fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Peg id for a row and a displacement within that row.
///
/// Returns `None` when the coordinates fall outside the table: a negative
/// row or displacement, a row past [`TABLE_ROWS`], or a displacement past
/// the end of its row. Whether the id lies on the active board is left to
/// the caller.
pub fn to_id(row: isize, displacement: isize) -> Option<usize> {
    let row = usize::try_from(row).ok()?;
    let displacement = usize::try_from(displacement).ok()?;
    if row >= TABLE_ROWS || displacement > row {
        return None;
    }
    Some(TRIANGULAR[row] + displacement)
}

/// Row and displacement of a peg id.
///
/// The row is the last one whose first id is `<= id`.
pub fn to_coords(id: usize) -> (usize, usize) {
    let row = TRIANGULAR.partition_point(|&first| first <= id) - 1;
    (row, id - TRIANGULAR[row])
}
