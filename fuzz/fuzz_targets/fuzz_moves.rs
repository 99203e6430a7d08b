#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use outpost::game::check_invariants;
use outpost::{try_apply_move, GameState, MoveError};

/// One raw move as an untrusted caller would submit it.
#[derive(Arbitrary, Debug)]
struct RawMove {
    x: u16,
    y: u16,
    side: u8,
}

/// Structured input for move fuzzing.
#[derive(Arbitrary, Debug)]
struct MovesInput {
    /// Board rows, capped below.
    width: u8,
    /// Cells per row, capped below.
    height: u8,
    /// Moves in order.
    moves: Vec<RawMove>,
}

fuzz_target!(|input: MovesInput| {
    // Small boards keep the corpus dense
    let width = u16::from(input.width % 14);
    let height = u16::from(input.height % 14);

    let Ok(mut state) = GameState::new(width, height) else {
        return;
    };

    for raw in input.moves.iter().take(400) {
        // Bias coordinates onto the board, keeping some off-board probes
        let x = raw.x % (width + 2);
        let y = raw.y % (height + 2);

        match try_apply_move(&state, x, y, raw.side % 5) {
            Ok(next) => {
                let violations = check_invariants(&next);
                assert!(
                    violations.is_empty(),
                    "move ({x}, {y}) side {} broke invariants: {violations:?}",
                    raw.side % 5
                );
                state = next;
            }
            Err(MoveError::Engine(_) | MoveError::Rejected(_)) => {}
        }
    }
});
