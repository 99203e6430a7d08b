//! Property-based tests for move resolution.
//!
//! Random move sequences are played from a fresh board; every accepted move
//! must keep the game invariants, and the resolver must agree with the probe.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use outpost::game::{check_invariants, check_move};
use outpost::{apply_move, probe_board, GameState, Position, Rejection, Side, Verdict};

const SIZE: u16 = 6;

fn arb_move() -> impl Strategy<Value = (Position, Side)> {
    (0..SIZE, 0..SIZE, prop_oneof![Just(Side::Red), Just(Side::Green)])
        .prop_map(|(x, y, side)| (Position::new(x, y), side))
}

/// Play `moves` in order, keeping accepted results.
fn play(moves: &[(Position, Side)]) -> GameState {
    let mut state = GameState::new(SIZE, SIZE).unwrap();
    for &(target, side) in moves {
        if let Ok(next) = apply_move(&state, target, side) {
            state = next;
        }
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Accepted moves never strand a cell or leave a stray score.
    #[test]
    fn prop_invariants_hold(moves in prop::collection::vec(arb_move(), 0..120)) {
        let mut state = GameState::new(SIZE, SIZE).unwrap();
        for (target, side) in moves {
            if let Ok(next) = apply_move(&state, target, side) {
                let violations = check_invariants(&next);
                prop_assert!(violations.is_empty(), "{:?} after {side} at {target}", violations);
                state = next;
            }
        }
    }

    /// A rejected move does not disturb the caller's state.
    #[test]
    fn prop_rejection_leaves_state(
        moves in prop::collection::vec(arb_move(), 0..80),
        (target, side) in arb_move(),
    ) {
        let state = play(&moves);
        let snapshot = state.clone();
        if apply_move(&state, target, side).is_err() {
            prop_assert_eq!(state, snapshot);
        }
    }

    /// A reinforced or attacked cell cannot be touched on the next move.
    #[test]
    fn prop_touched_cell_is_frozen(
        moves in prop::collection::vec(arb_move(), 0..80),
        (target, side) in arb_move(),
    ) {
        let state = play(&moves);
        let was_owned = state.board.cell(target).owner != Side::Unclaimed;
        if let Ok(next) = apply_move(&state, target, side) {
            if was_owned {
                prop_assert_eq!(next.frozen.slots()[1], Some(target));
                for side in [Side::Red, Side::Green] {
                    prop_assert_eq!(apply_move(&next, target, side), Err(Rejection::Frozen));
                }
            } else {
                prop_assert_eq!(next.frozen.slots()[1], None);
            }
        }
    }

    /// The probe grid agrees with the resolver cell by cell.
    #[test]
    fn prop_probe_matches_resolver(moves in prop::collection::vec(arb_move(), 0..80)) {
        let state = play(&moves);
        for side in [Side::Red, Side::Green] {
            let probe = probe_board(&state, side);
            for (pos, _) in state.board.iter() {
                prop_assert_eq!(probe.verdict(pos), Verdict::from(check_move(&state, pos, side)));
            }
        }
    }

    /// Modifying a copy never shows through in the original.
    #[test]
    fn prop_clone_is_independent(moves in prop::collection::vec(arb_move(), 1..80)) {
        let state = play(&moves);
        let snapshot = state.clone();
        let mut copy = state.clone();
        copy.frozen.touch(Some(Position::new(0, 0)));
        for (target, side) in moves {
            if let Ok(next) = apply_move(&copy, target, side) {
                copy = next;
            }
        }
        prop_assert_eq!(state, snapshot);
    }
}
