//! Outpost CLI - Command-line interface for inspecting and replaying games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Outpost - a territorial capture game resolver
#[derive(Parser, Debug)]
#[command(name = "outpost")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color the board with ANSI escapes
    #[arg(long, global = true)]
    color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the opening position
    New {
        /// Number of rows (default: 11)
        #[arg(short = 'W', long, default_value = "11")]
        width: u16,

        /// Cells per row (default: 11)
        #[arg(short = 'H', long, default_value = "11")]
        height: u16,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Replay a recorded game and print the final board
    Play {
        /// Recording file (.json)
        #[arg(required = true)]
        recording: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress move-by-move output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show which cells a side may play
    Probe {
        /// Recording to replay first (default: opening position)
        recording: Option<std::path::PathBuf>,

        /// Side to probe for
        #[arg(short, long, default_value = "green")]
        side: cli::SideArg,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Replay a recording and check game invariants after every move
    Validate {
        /// Recording file (.json)
        #[arg(required = true)]
        recording: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::New {
            width,
            height,
            format,
        } => cli::new::execute(width, height, format, args.color),

        Commands::Play {
            recording,
            format,
            quiet,
        } => cli::play::execute(&recording, format, args.color, quiet),

        Commands::Probe {
            recording,
            side,
            format,
        } => cli::probe::execute(recording.as_deref(), side, format, args.color),

        Commands::Validate { recording } => cli::validate::execute(&recording),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
