//! Demotion of territory cut off from its camp.

use tracing::trace;

use crate::game::reach::{flood, Passable};
use crate::game::{Board, Cell, Player};

/// Reset every cell of `player` that its camp no longer reaches.
///
/// Reachability is decided from one snapshot of the board before any cell
/// is demoted, so the result does not depend on sweep order. The camp itself
/// is never demoted.
///
/// Returns the number of demoted cells.
pub fn sever_disconnected(board: &mut Board, player: Player) -> usize {
    let side = player.side();
    let reach = flood(board, Passable::Owner(side), board.camp(player), &[]);

    let cut: Vec<_> = board
        .positions_owned_by(side)
        .filter(|&pos| !reach.contains(pos))
        .collect();

    for &pos in &cut {
        trace!(%pos, %player, "demoting disconnected cell");
        *board.cell_mut(pos) = Cell::UNCLAIMED;
    }

    cut.len()
}
