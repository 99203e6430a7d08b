//! CLI command implementations for Outpost.

pub(crate) mod new;
pub(crate) mod play;
pub(crate) mod probe;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use outpost::Player;
use std::error::Error;
use std::fmt;

/// Output format for board-printing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// A playing side on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SideArg {
    /// The side whose camp is at (0, 0).
    Red,
    /// The side whose camp is at the far corner.
    Green,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Red => Player::Red,
            SideArg::Green => Player::Green,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<outpost::EngineError> for CliError {
    fn from(e: outpost::EngineError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<outpost::replay::ReplayError> for CliError {
    fn from(e: outpost::replay::ReplayError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
