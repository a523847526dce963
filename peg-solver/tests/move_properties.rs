//! Property-based tests for apply/reverse bookkeeping
//!
//! **Feature: move-engine**

use peg_solver::moves::{apply, legal_jumps, reverse};
use peg_solver::{BoardSize, Jump, Objective, SearchState};
use proptest::prelude::*;
use proptest::sample::Index;

fn fresh(rows: i64, hole: usize) -> SearchState {
    SearchState::new(BoardSize::new(rows).unwrap(), hole, Objective::MostRemaining).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Property 1: apply then reverse is the identity**
    /// *For any* position reached by legal play and any legal jump from it,
    /// applying and immediately reversing leaves occupancy, peg count and
    /// path length unchanged.
    #[test]
    fn prop_apply_reverse_round_trip(
        rows in 5i64..=7,
        hole_seed in any::<Index>(),
        picks in prop::collection::vec(any::<Index>(), 0..10),
        last in any::<Index>(),
    ) {
        let size = BoardSize::new(rows).unwrap();
        let mut state = fresh(rows, hole_seed.index(size.total_pegs()));
        for pick in &picks {
            let jumps = legal_jumps(&state);
            if jumps.is_empty() {
                break;
            }
            apply(&mut state, &jumps[pick.index(jumps.len())]);
        }

        let jumps = legal_jumps(&state);
        if !jumps.is_empty() {
            let before_board = state.occupancy().to_vec();
            let before_pegs = state.pegs_remaining();
            let before_path = state.path().to_vec();

            let jump = jumps[last.index(jumps.len())];
            apply(&mut state, &jump);
            reverse(&mut state, &jump);

            prop_assert_eq!(state.occupancy(), before_board.as_slice());
            prop_assert_eq!(state.pegs_remaining(), before_pegs);
            prop_assert_eq!(state.path(), before_path.as_slice());
        }
    }

    /// **Property 2: peg counter tracks the board**
    /// *For any* sequence of legal jumps, the pegs-remaining counter equals
    /// the occupancy population count and the path grows by one per jump;
    /// unwinding the sequence returns to the starting position.
    #[test]
    fn prop_counter_matches_population(
        rows in 5i64..=7,
        hole_seed in any::<Index>(),
        picks in prop::collection::vec(any::<Index>(), 0..20),
    ) {
        let size = BoardSize::new(rows).unwrap();
        let mut state = fresh(rows, hole_seed.index(size.total_pegs()));
        let mut made: Vec<Jump> = Vec::new();

        for pick in &picks {
            let jumps = legal_jumps(&state);
            if jumps.is_empty() {
                break;
            }
            let jump = jumps[pick.index(jumps.len())];
            apply(&mut state, &jump);
            made.push(jump);

            prop_assert_eq!(state.pegs_remaining(), state.peg_count());
            prop_assert_eq!(state.path().len(), made.len());
            prop_assert_eq!(state.path().len() + state.pegs_remaining(), state.total_pegs() - 1);
        }

        while let Some(jump) = made.pop() {
            reverse(&mut state, &jump);
            prop_assert_eq!(state.pegs_remaining(), state.peg_count());
        }
        prop_assert!(state.is_initial());
    }
}
