// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Outpost: a deterministic move resolver for a two-player territorial
//! capture game.
//!
//! Two sides, red and green, grow territory from opposite corners of a
//! rectangular board. Every move claims, reinforces or attacks one cell and
//! is checked against the structural rules:
//! - every owned cell stays linked to its owner's camp;
//! - no move may wall either camp in.
//!
//! The resolver is a pure function from a state and a move to a new state or
//! a [`Rejection`]. It does no I/O and holds no shared state; callers
//! serialize moves per game (see [`session::Session`]).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI  ·  Replay  ·  Probe          │
//! ├─────────────────────────────────────┤
//! │   Session (turns, commit/discard)   │
//! ├─────────────────────────────────────┤
//! │   Move resolver + cleanup           │
//! ├─────────────────────────────────────┤
//! │   Board · adjacency · reachability  │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod probe;
pub mod render;
pub mod replay;
pub mod session;

pub use error::{EngineError, MoveError, Rejection};

// Re-export key game types at crate root for convenience
pub use game::{
    apply_move, try_apply_move, Board, Cell, FrozenPair, GameConfig, GameState, Player, Position,
    Side,
};
pub use probe::{probe_board, Probe, Verdict};
pub use session::{Session, SessionError};
