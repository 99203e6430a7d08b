//! Error types for the move resolver.
//!
//! Two families live here and they are never mixed:
//! - [`Rejection`] is a game verdict. The move broke a rule and the caller's
//!   state is untouched.
//! - [`EngineError`] is a contract violation. The caller handed the engine
//!   something it can never accept (a side code that does not exist, a
//!   position off the board, a degenerate board size).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was refused.
///
/// Rejections are final verdicts, not faults. They carry no side effects on
/// the state the caller passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rejection {
    /// The target is one of the two most recently touched cells.
    #[error("cell is frozen")]
    Frozen,
    /// A side tried to reinforce its own home corner.
    #[error("cannot target your own camp")]
    CannotTargetOwnCamp,
    /// A fresh claim is not linked to the claimant's home corner.
    #[error("no path back to camp")]
    NoPathToCamp,
    /// An attack on a cell the attacker does not border.
    #[error("no adjacent support")]
    NoAdjacentSupport,
    /// The move would wall a side in.
    #[error("move encloses a camp")]
    EnclosesOpponentCamp,
}

impl Rejection {
    /// All rejection kinds, in a stable order.
    pub const ALL: [Rejection; 5] = [
        Rejection::Frozen,
        Rejection::CannotTargetOwnCamp,
        Rejection::NoPathToCamp,
        Rejection::NoAdjacentSupport,
        Rejection::EnclosesOpponentCamp,
    ];

    /// Stable upper-case code, identical to the serialized form.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rejection::Frozen => "FROZEN",
            Rejection::CannotTargetOwnCamp => "CANNOT_TARGET_OWN_CAMP",
            Rejection::NoPathToCamp => "NO_PATH_TO_CAMP",
            Rejection::NoAdjacentSupport => "NO_ADJACENT_SUPPORT",
            Rejection::EnclosesOpponentCamp => "ENCLOSES_OPPONENT_CAMP",
        }
    }
}

/// Caller bugs surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A raw side code outside the known set.
    #[error("unknown side code: {0}")]
    UnknownSide(u8),
    /// A position outside the board.
    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        /// Row index of the offending position.
        x: u16,
        /// Column index of the offending position.
        y: u16,
        /// Board width.
        width: u16,
        /// Board height.
        height: u16,
    },
    /// The board is too small to hold two distinct camps.
    #[error("board must be at least 2x2, got {width}x{height}")]
    BoardTooSmall {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// A textual board that could not be parsed.
    #[error("malformed board: {0}")]
    MalformedBoard(String),
}

/// Outcome of the bounds-checked move entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move was legal input but the rules refused it.
    #[error(transparent)]
    Rejected(#[from] Rejection),
    /// The input itself was invalid.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
