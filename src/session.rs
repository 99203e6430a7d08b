//! Caller-side move serialization for one game.
//!
//! The resolver is a pure function; a `Session` is the single owner of the
//! committed state. Moves are applied to a snapshot and committed only when
//! accepted, so readers never observe a half-applied move. Green moves first
//! and the turn passes after every accepted move.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::{EngineError, Rejection};
use crate::game::{apply_move, assert_invariants, GameConfig, GameState, Player, Position, Side};

/// Why a submission did not change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The submitting side does not hold the turn.
    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn {
        /// Side holding the turn.
        expected: Player,
        /// Side that submitted.
        got: Side,
    },
    /// The target is off the board.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The rules refused the move.
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// One submitted move and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Acting side.
    pub side: Side,
    /// Target cell.
    pub target: Position,
    /// `None` if accepted, otherwise the refusal code.
    pub rejection: Option<Rejection>,
}

/// A running game.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    turn: Player,
    history: Vec<MoveRecord>,
}

impl Session {
    /// Start a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Ok(Self::from_state(GameState::from_config(config)?))
    }

    /// Continue from an existing state with green to move.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            turn: Player::Green,
            history: Vec::new(),
        }
    }

    /// The committed state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Side to move.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// Moves the rules have judged, in submission order.
    ///
    /// Out-of-turn and off-board submissions are not recorded.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Submit a move.
    ///
    /// A submission by [`Side::Unclaimed`] is a no-op that keeps the turn.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotYourTurn`] for an out-of-turn side,
    /// [`SessionError::Engine`] for an off-board target, and
    /// [`SessionError::Rejected`] when the rules refuse the move. In every
    /// error case the committed state is unchanged.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a committed move breaks a game invariant.
    pub fn submit(&mut self, target: Position, side: Side) -> Result<&GameState, SessionError> {
        let Some(player) = side.player() else {
            return Ok(&self.state);
        };
        if player != self.turn {
            return Err(SessionError::NotYourTurn {
                expected: self.turn,
                got: side,
            });
        }
        self.state.board.position(target.x, target.y)?;

        match apply_move(&self.state, target, side) {
            Ok(next) => {
                assert_invariants(&next);
                self.state = next;
                self.history.push(MoveRecord {
                    side,
                    target,
                    rejection: None,
                });
                self.turn = player.opponent();
                debug!(%target, %player, next = %self.turn, "move committed");
                Ok(&self.state)
            }
            Err(rejection) => {
                self.history.push(MoveRecord {
                    side,
                    target,
                    rejection: Some(rejection),
                });
                Err(rejection.into())
            }
        }
    }

    /// Final tallies: cells held and total score per player.
    #[must_use]
    pub fn standings(&self) -> [(Player, usize, u64); 2] {
        let board = &self.state.board;
        let tally = |p: Player| (p, board.count_owned(p.side()), board.total_score(p));
        [tally(Player::Red), tally(Player::Green)]
    }
}
