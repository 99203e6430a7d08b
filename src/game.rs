//! Game layer for Outpost.
//!
//! Implements the move rules:
//! - Board of cells owned by red, green or nobody, each with a score
//! - Adjacency and flood-fill reachability
//! - Move resolution (claim, reinforce, attack) with camp safety
//! - Cleanup of territory cut off by a capture

pub mod adjacency;
mod board;
pub mod cleanup;
mod frozen;
pub mod invariants;
pub mod reach;
mod resolver;
mod state;

pub use adjacency::{neighbors, support, Filter, Neighbors};
pub use board::{Board, Cell, Player, Position, Side, CAMP_INIT_SCORE, CAPTURE_BONUS, INIT_SCORE};
pub use frozen::FrozenPair;
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use reach::{is_reachable, Passable};
pub use resolver::{apply_move, camps_are_open, check_move, step, try_apply_move};
pub use state::{GameConfig, GameState};
