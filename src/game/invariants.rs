//! Game invariants - sanity checks that detect bugs.
//!
//! Every state produced by accepted moves from a fresh game satisfies these.
//! A violation means either a resolver bug or a hand-built state that no
//! sequence of moves could produce.

use crate::game::reach::{flood, Passable};
use crate::game::{GameState, Player, Side};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let board = &state.board;

    for (pos, cell) in board.iter() {
        if cell.owner == Side::Unclaimed && cell.score != 0 {
            violations.push(InvariantViolation {
                message: format!("Unclaimed cell at {pos} has score {}", cell.score),
            });
        }
    }

    // Connectivity: every owned cell hangs off its owner's camp.
    for player in Player::BOTH {
        let side = player.side();
        let reach = flood(board, Passable::Owner(side), board.camp(player), &[]);
        let stranded = board
            .positions_owned_by(side)
            .filter(|&pos| !reach.contains(pos))
            .count();
        if stranded > 0 {
            violations.push(InvariantViolation {
                message: format!("{stranded} {player} cells are disconnected from the camp"),
            });
        }
    }

    for pos in state.frozen.iter() {
        if !board.in_bounds(pos) {
            violations.push(InvariantViolation {
                message: format!("Frozen position {pos} is off the board"),
            });
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
