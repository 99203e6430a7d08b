//! Play command implementation: replay a recording.

use super::output::{format_steps, JsonBoard, JsonPlayResult};
use super::{CliError, OutputFormat};
use outpost::render::render_board;
use outpost::replay::Recording;
use std::path::Path;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded.
pub(crate) fn execute(
    recording: &Path,
    format: OutputFormat,
    color: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let loaded = Recording::load(recording).map_err(|e| {
        CliError::new(format!("Failed to load {}: {e}", recording.display()))
    })?;
    let replay = loaded.replay()?;
    let state = replay.session.state();

    match format {
        OutputFormat::Text => {
            if !quiet {
                print!("{}", format_steps(&replay.steps));
                println!();
            }
            print!("{}", render_board(state, color));
            println!(
                "{} of {} moves accepted, {} to move",
                replay.accepted(),
                replay.steps.len(),
                replay.session.turn()
            );
        }
        OutputFormat::Json => {
            let result = JsonPlayResult {
                steps: &replay.steps,
                turn: replay.session.turn(),
                board: JsonBoard::from_state(state),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
