//! Game state: the board plus the recency lock.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::game::{Board, Cell, FrozenPair, Player, CAMP_INIT_SCORE};

/// Board dimensions for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (default: 11).
    pub width: u16,
    /// Cells per row (default: 11).
    pub height: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
        }
    }
}

impl GameConfig {
    /// Check that the dimensions can hold two distinct camps.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BoardTooSmall`] if either dimension is below 2.
    pub fn validate(self) -> Result<(), EngineError> {
        if self.width < 2 || self.height < 2 {
            return Err(EngineError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Complete state of one game.
///
/// `Clone` is a deep copy: the board owns its cells, so a cloned state shares
/// nothing with the original. Callers snapshot with `clone()` before trying a
/// speculative move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The board.
    pub board: Board,
    /// Recently touched cells that cannot be targeted.
    pub frozen: FrozenPair,
}

impl GameState {
    /// Start a game: every cell unclaimed except the two camps.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BoardTooSmall`] if either dimension is below 2.
    pub fn new(width: u16, height: u16) -> Result<Self, EngineError> {
        let mut board = Board::new(width, height)?;
        for player in Player::BOTH {
            let camp = board.camp(player);
            *board.cell_mut(camp) = Cell::owned(player, CAMP_INIT_SCORE);
        }
        Ok(Self {
            board,
            frozen: FrozenPair::new(),
        })
    }

    /// Start a game with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Self::new(config.width, config.height)
    }

    /// Assemble a state from parts, e.g. a parsed board.
    #[must_use]
    pub const fn from_parts(board: Board, frozen: FrozenPair) -> Self {
        Self { board, frozen }
    }
}
