//! Solver results checked against an independent brute-force search
//!
//! The reference walks every reachable position of a bitmask board with
//! memoisation and no pruning, so its extremes are exact.

use peg_solver::moves::{legal_jumps, replay};
use peg_solver::{BoardSize, Objective, SearchState, solve};
use std::collections::HashMap;

/// Every `(from, over, to)` triple on a board of `rows` rows
fn all_jumps(rows: i32) -> Vec<(u32, u32, u32)> {
    let id = |r: i32, d: i32| -> Option<u32> {
        (r >= 0 && r < rows && d >= 0 && d <= r).then(|| (r * (r + 1) / 2 + d) as u32)
    };
    let steps = [(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1)];

    let mut jumps = Vec::new();
    for r in 0..rows {
        for d in 0..=r {
            for (dr, dd) in steps {
                if let (Some(from), Some(over), Some(to)) =
                    (id(r, d), id(r + dr, d + dd), id(r + 2 * dr, d + 2 * dd))
                {
                    jumps.push((from, over, to));
                }
            }
        }
    }
    jumps
}

/// (most, fewest) pegs left at any dead end reachable from `board`
fn dead_end_extremes(
    board: u64,
    jumps: &[(u32, u32, u32)],
    memo: &mut HashMap<u64, (u32, u32)>,
) -> (u32, u32) {
    if let Some(&known) = memo.get(&board) {
        return known;
    }

    let mut extremes: Option<(u32, u32)> = None;
    for &(from, over, to) in jumps {
        let has = |bit: u32| board & (1 << bit) != 0;
        if has(from) && has(over) && !has(to) {
            let next = board ^ (1 << from) ^ (1 << over) ^ (1 << to);
            let (most, fewest) = dead_end_extremes(next, jumps, memo);
            extremes = Some(match extremes {
                Some((m, f)) => (m.max(most), f.min(fewest)),
                None => (most, fewest),
            });
        }
    }

    let pegs = board.count_ones();
    let result = extremes.unwrap_or((pegs, pegs));
    memo.insert(board, result);
    result
}

fn reference(rows: i32, hole: usize) -> (usize, usize) {
    let total = (rows * (rows + 1) / 2) as u32;
    let board = ((1u64 << total) - 1) & !(1u64 << hole);
    let (most, fewest) = dead_end_extremes(board, &all_jumps(rows), &mut HashMap::new());
    (most as usize, fewest as usize)
}

fn search(rows: i64, hole: usize, objective: Objective) -> SearchState {
    let mut state = SearchState::new(BoardSize::new(rows).unwrap(), hole, objective).unwrap();
    solve(&mut state);
    state
}

#[test]
fn test_most_remaining_matches_reference_on_five_rows() {
    for hole in 0..15 {
        let (most, _) = reference(5, hole);
        let state = search(5, hole, Objective::MostRemaining);
        assert_eq!(state.best_remaining(), most, "hole {}", hole + 1);
    }
}

#[test]
fn test_fewest_remaining_matches_reference_on_five_rows() {
    for hole in 0..15 {
        let (_, fewest) = reference(5, hole);
        let state = search(5, hole, Objective::FewestRemaining);
        assert_eq!(state.best_remaining(), fewest, "hole {}", hole + 1);
    }
}

#[test]
fn test_apex_hole_on_five_rows() {
    let state = search(5, 0, Objective::MostRemaining);
    assert!(state.has_result());
    assert!(state.best_remaining() >= 1);
    assert!(state.best_remaining() < 14);

    let end = replay(state.size(), 0, state.best_path()).unwrap();
    assert!(legal_jumps(&end).is_empty());
    assert_eq!(end.peg_count(), state.best_remaining());
}

#[test]
fn test_repeated_runs_agree() {
    for hole in [0, 4, 7] {
        let first = search(5, hole, Objective::MostRemaining);
        let second = search(5, hole, Objective::MostRemaining);
        assert_eq!(first.best_remaining(), second.best_remaining());
        assert_eq!(first.best_path(), second.best_path());
    }
}

#[test]
fn test_state_restored_after_search() {
    for objective in [Objective::MostRemaining, Objective::FewestRemaining] {
        let state = search(5, 2, objective);
        assert!(state.is_initial());
        assert_eq!(state.peg_count(), state.pegs_remaining());
        assert_eq!(state.pegs_remaining(), 14);
    }
}
