//! Recording validation command implementation.

use super::CliError;
use outpost::game::check_invariants;
use outpost::replay::Recording;
use std::path::Path;

/// Execute the validate command: replay a recording and check the game
/// invariants after every accepted move.
///
/// # Errors
///
/// Returns an error if the recording cannot be loaded or any invariant
/// fails.
pub(crate) fn execute(recording: &Path) -> Result<(), CliError> {
    let loaded = Recording::load(recording).map_err(|e| {
        CliError::new(format!("Failed to read {}: {e}", recording.display()))
    })?;

    println!("Validating: {}", recording.display());
    println!();
    print_check("Recording parses", true);
    print_check(
        &format!("Board size {}x{}", loaded.config.width, loaded.config.height),
        true,
    );

    let mut failures = Vec::new();
    let replay = loaded.replay_inspect(|index, state| {
        for violation in check_invariants(state) {
            failures.push(format!("move {}: {violation}", index + 1));
        }
    })?;

    print_check("Invariants hold after every move", failures.is_empty());
    for failure in &failures {
        println!("    {failure}");
    }

    println!();
    println!("Summary:");
    println!("  Moves:     {}", replay.steps.len());
    println!("  Accepted:  {}", replay.accepted());

    if !failures.is_empty() {
        return Err(CliError::new(format!(
            "{} invariant violation(s) found",
            failures.len()
        )));
    }

    println!();
    println!("Validation successful!");
    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
