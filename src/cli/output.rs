//! Output formatting utilities for CLI.

use outpost::replay::{Step, StepOutcome};
use outpost::{GameState, Player, Position, Probe};
use serde::Serialize;

/// JSON-serializable board snapshot.
#[derive(Debug, Serialize)]
pub(super) struct JsonBoard {
    /// Number of rows.
    pub(super) width: u16,
    /// Cells per row.
    pub(super) height: u16,
    /// One line per row in the textual board format.
    pub(super) rows: Vec<String>,
    /// Frozen positions, oldest first.
    pub(super) frozen: Vec<Position>,
    /// Per-player tallies.
    pub(super) players: Vec<JsonStanding>,
}

/// JSON-serializable per-player tally.
#[derive(Debug, Serialize)]
pub(super) struct JsonStanding {
    /// Player name.
    pub(super) player: Player,
    /// Cells owned.
    pub(super) cells: usize,
    /// Sum of owned scores.
    pub(super) score: u64,
}

impl JsonBoard {
    /// Create from a game state.
    pub(super) fn from_state(state: &GameState) -> Self {
        let board = &state.board;
        Self {
            width: board.width(),
            height: board.height(),
            rows: board.to_string().lines().map(str::to_string).collect(),
            frozen: state.frozen.iter().collect(),
            players: Player::BOTH
                .iter()
                .map(|&player| JsonStanding {
                    player,
                    cells: board.count_owned(player.side()),
                    score: board.total_score(player),
                })
                .collect(),
        }
    }
}

/// JSON-serializable replay result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayResult<'a> {
    /// Per-move outcomes.
    pub(super) steps: &'a [Step],
    /// Side to move next.
    pub(super) turn: Player,
    /// Final board.
    pub(super) board: JsonBoard,
}

/// JSON-serializable probe result.
#[derive(Debug, Serialize)]
pub(super) struct JsonProbeResult<'a> {
    /// Board the probe ran against.
    pub(super) board: JsonBoard,
    /// Cells the side may play.
    pub(super) legal: Vec<Position>,
    /// Full verdict grid.
    pub(super) probe: &'a Probe,
}

/// Format replay steps as human-readable text.
pub(super) fn format_steps(steps: &[Step]) -> String {
    let mut output = String::new();
    for (i, step) in steps.iter().enumerate() {
        let verdict = match step.outcome {
            StepOutcome::Accepted => "ok",
            StepOutcome::Rejected(r) => r.code(),
            StepOutcome::OutOfTurn => "out of turn",
            StepOutcome::OffBoard => "off board",
        };
        let target = step.planned.target.to_string();
        output.push_str(&format!(
            "{:>4}. {:<5} {target:<10} {verdict}\n",
            i + 1,
            step.planned.side
        ));
    }
    output
}
