//! New game command implementation.

use super::output::JsonBoard;
use super::{CliError, OutputFormat};
use outpost::render::render_board;
use outpost::{GameConfig, GameState};

/// Execute the new command: print the opening position.
///
/// # Errors
///
/// Returns an error if the board size is invalid.
pub(crate) fn execute(width: u16, height: u16, format: OutputFormat, color: bool) -> Result<(), CliError> {
    let state = GameState::from_config(GameConfig { width, height })?;

    match format {
        OutputFormat::Text => print!("{}", render_board(&state, color)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonBoard::from_state(&state))?;
            println!("{json}");
        }
    }

    Ok(())
}
