//! Plain-text rendering of boards and probes for terminal viewing.

// format! with push_str reads better than write! for this kind of layout
#![allow(clippy::format_push_string)]

use crate::error::Rejection;
use crate::game::{GameState, Player, Position, Side};
use crate::probe::{Probe, Verdict};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Width of one rendered cell, separator excluded.
const CELL_WIDTH: usize = 4;

/// Render a state as a grid, one line per row.
///
/// Output format:
/// ```text
/// Board 4x4   frozen: (2, 1)
///     0    1    2    3
///  0  R6*  .    .    .
///  1  .    R5   .    .
///  2  .    R0#  G4   .
///  3  .    G5   G5   G6*
///
/// Legend: R/G=owner+score  *=camp  #=frozen  .=unclaimed
/// red: 3 cells, 11 points   green: 4 cells, 20 points
/// ```
#[must_use]
pub fn render_board(state: &GameState, color: bool) -> String {
    let board = &state.board;
    let mut output = String::new();

    output.push_str(&format!("Board {}x{}", board.width(), board.height()));
    let frozen: Vec<String> = state.frozen.iter().map(|p| p.to_string()).collect();
    if !frozen.is_empty() {
        output.push_str(&format!("   frozen: {}", frozen.join(" ")));
    }
    output.push('\n');
    render_column_header(&mut output, board.height());

    for x in 0..board.width() {
        output.push_str(&format!("{x:>2}  "));
        for (y, cell) in board.row(x).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let pos = Position::new(x, y as u16);
            let mut token = cell.to_string();
            if board.camp_owner(pos).is_some() {
                token.push('*');
            }
            if state.frozen.contains(pos) {
                token.push('#');
            }
            push_cell(&mut output, &token, color.then(|| owner_color(cell.owner)));
        }
        trim_line(&mut output);
    }

    output.push_str("\nLegend: R/G=owner+score  *=camp  #=frozen  .=unclaimed\n");
    let tallies: Vec<String> = Player::BOTH
        .iter()
        .map(|&p| {
            format!(
                "{p}: {} cells, {} points",
                board.count_owned(p.side()),
                board.total_score(p)
            )
        })
        .collect();
    output.push_str(&tallies.join("   "));
    output.push('\n');

    output
}

/// Render a probe over its state.
///
/// Legal cells show `+`; refused cells show a one-letter reason.
#[must_use]
pub fn render_probe(state: &GameState, probe: &Probe, color: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Moves for {} ({} legal)\n",
        probe.side,
        probe.legal_positions().len()
    ));
    render_column_header(&mut output, probe.height());

    for x in 0..probe.width() {
        output.push_str(&format!("{x:>2}  "));
        for (y, verdict) in probe.row(x).iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let cell = state.board.cell(Position::new(x, y as u16));
            let token = match verdict {
                Verdict::Legal => "+".to_string(),
                Verdict::Rejected(rejection) => rejection_letter(*rejection).to_string(),
            };
            let paint = match verdict {
                Verdict::Legal => BOLD,
                Verdict::Rejected(_) => owner_color(cell.owner),
            };
            push_cell(&mut output, &token, color.then_some(paint));
        }
        trim_line(&mut output);
    }

    output.push_str(
        "\nLegend: +=legal  F=frozen  C=own camp  P=no path to camp  S=no support  E=encloses camp\n",
    );
    output
}

/// One-letter tag for a rejection.
#[must_use]
pub const fn rejection_letter(rejection: Rejection) -> char {
    match rejection {
        Rejection::Frozen => 'F',
        Rejection::CannotTargetOwnCamp => 'C',
        Rejection::NoPathToCamp => 'P',
        Rejection::NoAdjacentSupport => 'S',
        Rejection::EnclosesOpponentCamp => 'E',
    }
}

const fn owner_color(owner: Side) -> &'static str {
    match owner {
        Side::Unclaimed => GRAY,
        Side::Red => RED,
        Side::Green => GREEN,
    }
}

fn render_column_header(output: &mut String, height: u16) {
    output.push_str("    ");
    for y in 0..height {
        output.push_str(&format!("{y:<CELL_WIDTH$} "));
    }
    trim_line(output);
}

fn push_cell(output: &mut String, token: &str, paint: Option<&str>) {
    let padded = format!("{token:<CELL_WIDTH$} ");
    match paint {
        Some(code) => output.push_str(&format!("{code}{padded}{RESET}")),
        None => output.push_str(&padded),
    }
}

/// Drop trailing padding and end the line.
fn trim_line(output: &mut String) {
    let trimmed = output.trim_end_matches(' ').len();
    output.truncate(trimmed);
    output.push('\n');
}
