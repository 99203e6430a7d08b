//! Probe command implementation: classify every cell for one side.

use super::output::{JsonBoard, JsonProbeResult};
use super::{CliError, OutputFormat, SideArg};
use outpost::render::{render_board, render_probe};
use outpost::replay::Recording;
use outpost::{probe_board, GameConfig, GameState, Player};
use std::path::Path;

/// Execute the probe command.
///
/// Without a recording the probe runs against the opening position.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded.
pub(crate) fn execute(
    recording: Option<&Path>,
    side: SideArg,
    format: OutputFormat,
    color: bool,
) -> Result<(), CliError> {
    let state = match recording {
        Some(path) => {
            let loaded = Recording::load(path)
                .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))?;
            loaded.replay()?.session.state().clone()
        }
        None => GameState::from_config(GameConfig::default())?,
    };

    let player = Player::from(side);
    let probe = probe_board(&state, player.side());

    match format {
        OutputFormat::Text => {
            print!("{}", render_board(&state, color));
            println!();
            print!("{}", render_probe(&state, &probe, color));
        }
        OutputFormat::Json => {
            let result = JsonProbeResult {
                board: JsonBoard::from_state(&state),
                legal: probe.legal_positions(),
                probe: &probe,
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
