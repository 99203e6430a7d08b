//! Move resolution.
//!
//! A move targets one cell and does exactly one of:
//! - **claim** an unclaimed cell, which must link to the claimant's camp;
//! - **reinforce** an own cell, gaining strength from friendly neighbors;
//! - **attack** an enemy cell, which needs at least one friendly neighbor
//!   and flips ownership once its score goes below zero.
//!
//! A capture may cut enemy territory off from its camp; cut cells are
//! demoted in the same move. Any move that changes ownership must leave both
//! camps open (see [`camps_are_open`]).
//!
//! The resolver works on a copy. A rejected move leaves the caller's state
//! exactly as it was.

use tracing::debug;

use crate::error::{MoveError, Rejection};
use crate::game::adjacency::support;
use crate::game::cleanup::sever_disconnected;
use crate::game::reach::{is_reachable, Passable};
use crate::game::{Board, Cell, GameState, Player, Position, Side, CAPTURE_BONUS, INIT_SCORE};

/// Support above which reinforcement and attack use the larger step.
const SUPPORT_THRESHOLD: usize = 3;

/// Score change for a reinforcement or attack with `support` friendly
/// neighbors: 1 for up to three, 2 beyond.
#[must_use]
pub const fn step(support: usize) -> u32 {
    if support <= SUPPORT_THRESHOLD { 1 } else { 2 }
}

/// Apply a move by `side` on `target`.
///
/// Returns the new state, or the reason the move was refused. `state` is
/// never modified. A move by [`Side::Unclaimed`] is a no-op that returns a
/// copy of `state`.
///
/// # Errors
///
/// Returns a [`Rejection`] when the rules refuse the move.
///
/// # Panics
///
/// Panics if `target` is off the board. Use [`try_apply_move`] for
/// unchecked input.
pub fn apply_move(state: &GameState, target: Position, side: Side) -> Result<GameState, Rejection> {
    let Some(player) = side.player() else {
        return Ok(state.clone());
    };

    let result = resolve(state, target, player);
    match &result {
        Ok(_) => debug!(%target, %player, "move accepted"),
        Err(rejection) => debug!(%target, %player, code = rejection.code(), "move rejected"),
    }
    result
}

/// Bounds-checked [`apply_move`] taking a raw side code.
///
/// # Errors
///
/// Returns [`MoveError::Engine`] for an unknown side code or an off-board
/// target, and [`MoveError::Rejected`] when the rules refuse the move.
pub fn try_apply_move(state: &GameState, x: u16, y: u16, side_code: u8) -> Result<GameState, MoveError> {
    let side = Side::try_from(side_code)?;
    let target = state.board.position(x, y)?;
    Ok(apply_move(state, target, side)?)
}

fn resolve(state: &GameState, target: Position, player: Player) -> Result<GameState, Rejection> {
    if state.frozen.contains(target) {
        return Err(Rejection::Frozen);
    }

    let own = player.side();
    let current = *state.board.cell(target);

    if current.owner == own && target == state.board.camp(player) {
        return Err(Rejection::CannotTargetOwnCamp);
    }
    if current.owner == player.opponent().side() && support(&state.board, target, own) == 0 {
        return Err(Rejection::NoAdjacentSupport);
    }

    let mut next = state.clone();
    let mut territory_changed = false;

    if current.owner == Side::Unclaimed {
        *next.board.cell_mut(target) = Cell::owned(player, INIT_SCORE);
        next.frozen.touch(None);

        let camp = next.board.camp(player);
        if !is_reachable(&next.board, Passable::Owner(own), camp, &[target]) {
            return Err(Rejection::NoPathToCamp);
        }
        territory_changed = true;
    } else if current.owner == own {
        let gain = step(support(&next.board, target, own));
        let cell = next.board.cell_mut(target);
        cell.score = cell.score.saturating_add(gain);
        next.frozen.touch(Some(target));
    } else {
        let loss = step(support(&next.board, target, own));
        let cell = next.board.cell_mut(target);
        match cell.score.checked_sub(loss) {
            Some(rest) => cell.score = rest,
            None => {
                *cell = Cell::owned(player, loss - cell.score + CAPTURE_BONUS);
                territory_changed = true;
                let demoted = sever_disconnected(&mut next.board, player.opponent());
                debug!(%target, %player, demoted, "cell captured");
            }
        }
        next.frozen.touch(Some(target));
    }

    if territory_changed && !camps_are_open(&next.board) {
        return Err(Rejection::EnclosesOpponentCamp);
    }

    Ok(next)
}

/// Camp safety: from each camp, walking only over cells its side does not
/// own, every cell of the other side must be reachable.
///
/// Fails when a side has walled its own camp in, or has sealed off part of
/// the opponent's territory.
#[must_use]
pub fn camps_are_open(board: &Board) -> bool {
    Player::BOTH.into_iter().all(|player| {
        let targets: Vec<Position> = board.positions_owned_by(player.opponent().side()).collect();
        is_reachable(board, Passable::NotOwner(player.side()), board.camp(player), &targets)
    })
}

/// Check a move without keeping the result.
///
/// # Errors
///
/// Returns the [`Rejection`] the move would receive.
pub fn check_move(state: &GameState, target: Position, side: Side) -> Result<(), Rejection> {
    apply_move(state, target, side).map(|_| ())
}
