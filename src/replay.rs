//! Game recordings and replay.
//!
//! Because move resolution is deterministic, a recording only needs the
//! board size and the submitted moves. Replaying feeds the moves through a
//! fresh [`Session`] and reports how each one ended.
//!
//! Recordings are stored as JSON:
//!
//! ```text
//! {
//!   "config": { "width": 11, "height": 11 },
//!   "moves": [ { "side": "green", "target": { "x": 10, "y": 9 } }, ... ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::error::{EngineError, Rejection};
use crate::game::{GameConfig, GameState, Position, Side};
use crate::session::{Session, SessionError};

/// Errors from loading, saving or replaying a recording.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// File could not be read or written.
    #[error("recording I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// File is not a valid recording.
    #[error("recording is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// The recorded configuration is invalid.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// A submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMove {
    /// Acting side.
    pub side: Side,
    /// Target cell.
    pub target: Position,
}

/// Board size plus the moves submitted, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recording {
    /// Board dimensions.
    pub config: GameConfig,
    /// Moves in submission order.
    pub moves: Vec<PlannedMove>,
}

/// How one replayed move ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Committed.
    Accepted,
    /// Refused by the rules.
    Rejected(Rejection),
    /// Submitted by the side not holding the turn; ignored.
    OutOfTurn,
    /// Target off the board; ignored.
    OffBoard,
}

impl From<&Result<&GameState, SessionError>> for StepOutcome {
    fn from(result: &Result<&GameState, SessionError>) -> Self {
        match result {
            Ok(_) => StepOutcome::Accepted,
            Err(SessionError::Rejected(rejection)) => StepOutcome::Rejected(*rejection),
            Err(SessionError::NotYourTurn { .. }) => StepOutcome::OutOfTurn,
            Err(SessionError::Engine(_)) => StepOutcome::OffBoard,
        }
    }
}

/// One replayed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The move as recorded.
    #[serde(flatten)]
    pub planned: PlannedMove,
    /// What happened to it.
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Result of replaying a recording.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Session after the last move.
    pub session: Session,
    /// Per-move outcomes.
    pub steps: Vec<Step>,
}

impl Replay {
    /// Number of committed moves.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::Accepted)
            .count()
    }
}

impl Recording {
    /// Create an empty recording.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            moves: Vec::new(),
        }
    }

    /// Append a move.
    pub fn push(&mut self, side: Side, target: Position) {
        self.moves.push(PlannedMove { side, target });
    }

    /// Save the recording as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ReplayError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a recording, or
    /// holds an invalid configuration.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let reader = BufReader::new(File::open(path)?);
        let recording: Self = serde_json::from_reader(reader)?;
        recording.config.validate()?;
        Ok(recording)
    }

    /// Replay every move.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn replay(&self) -> Result<Replay, ReplayError> {
        self.replay_inspect(|_, _| {})
    }

    /// Replay every move, calling `inspect` with the move index and the new
    /// state after each accepted move.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn replay_inspect(
        &self,
        mut inspect: impl FnMut(usize, &GameState),
    ) -> Result<Replay, ReplayError> {
        let mut session = Session::new(self.config)?;
        let mut steps = Vec::with_capacity(self.moves.len());

        for (index, planned) in self.moves.iter().enumerate() {
            let result = session.submit(planned.target, planned.side);
            let outcome = StepOutcome::from(&result);
            if let Ok(state) = result {
                inspect(index, state);
            }
            steps.push(Step {
                planned: *planned,
                outcome,
            });
        }

        let replay = Replay { session, steps };
        info!(
            moves = self.moves.len(),
            accepted = replay.accepted(),
            "replay finished"
        );
        Ok(replay)
    }
}
