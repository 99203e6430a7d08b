//! Flood-fill reachability over the board.
//!
//! A flood starts at one cell, which is always reached whatever its owner,
//! and expands through neighbors whose owner passes a [`Passable`] rule.
//! Target cells can be given an overridden owner for the duration of the
//! fill; the board itself is never written.

use crate::game::adjacency::{candidates, Filter};
use crate::game::{Board, Position, Side};

/// Which cells a flood may step onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passable {
    /// Only cells owned by the side.
    Owner(Side),
    /// Any cell not owned by the side.
    NotOwner(Side),
}

impl Passable {
    fn filter(self) -> Filter {
        match self {
            Passable::Owner(side) => Filter::OwnedBy(side),
            Passable::NotOwner(side) => Filter::NotOwnedBy(side),
        }
    }

    /// Owner that overridden targets take during the fill.
    ///
    /// Targets always become passable: own class for [`Passable::Owner`],
    /// neutral for [`Passable::NotOwner`].
    #[must_use]
    pub fn target_owner(self) -> Side {
        match self {
            Passable::Owner(side) => side,
            Passable::NotOwner(_) => Side::Unclaimed,
        }
    }
}

/// Ownership as seen by a flood: overrides first, then the board.
struct OwnershipView<'a> {
    board: &'a Board,
    overridden: Vec<bool>,
    as_owner: Side,
}

impl<'a> OwnershipView<'a> {
    fn new(board: &'a Board, overrides: &[Position], as_owner: Side) -> Self {
        let mut overridden = Vec::new();
        if !overrides.is_empty() {
            overridden.resize(board.len(), false);
            for &pos in overrides {
                overridden[board.index(pos)] = true;
            }
        }
        Self {
            board,
            overridden,
            as_owner,
        }
    }

    #[inline]
    fn owner(&self, idx: usize, pos: Position) -> Side {
        if self.overridden.get(idx).copied().unwrap_or(false) {
            self.as_owner
        } else {
            self.board.cell(pos).owner
        }
    }
}

/// The set of cells one flood reached.
#[derive(Debug, Clone)]
pub struct Reach {
    visited: Vec<bool>,
    width: u16,
    height: u16,
}

impl Reach {
    /// Check whether the flood reached `pos`. Off-board positions are never
    /// reached.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        if pos.x >= self.width || pos.y >= self.height {
            return false;
        }
        let idx = usize::from(pos.x) * usize::from(self.height) + usize::from(pos.y);
        self.visited.get(idx).copied().unwrap_or(false)
    }

    /// Number of reached cells, the start included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

/// Flood from `start`, viewing every cell in `overrides` as
/// [`Passable::target_owner`].
///
/// Each cell is pushed at most once, so the fill is linear in board size.
///
/// # Panics
///
/// Panics if `start` or any override is off the board.
#[must_use]
pub fn flood(board: &Board, passable: Passable, start: Position, overrides: &[Position]) -> Reach {
    let view = OwnershipView::new(board, overrides, passable.target_owner());
    let filter = passable.filter();

    let mut visited = vec![false; board.len()];
    let mut stack = Vec::with_capacity(64);
    visited[board.index(start)] = true;
    stack.push(start);

    while let Some(current) = stack.pop() {
        for &next in candidates(board.width(), board.height(), current).iter() {
            let idx = board.index(next);
            if visited[idx] || !filter.accepts(view.owner(idx, next)) {
                continue;
            }
            visited[idx] = true;
            stack.push(next);
        }
    }

    Reach {
        visited,
        width: board.width(),
        height: board.height(),
    }
}

/// Check that every target is reachable from `start`.
///
/// Targets are viewed as passable during the fill (see
/// [`Passable::target_owner`]).
#[must_use]
pub fn is_reachable(board: &Board, passable: Passable, start: Position, targets: &[Position]) -> bool {
    let reach = flood(board, passable, start, targets);
    targets.iter().all(|&t| reach.contains(t))
}
