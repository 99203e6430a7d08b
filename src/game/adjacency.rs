//! Neighborhood of a cell.
//!
//! Candidates are generated in a fixed order: the two same-row cells
//! `(x, y - 1)` and `(x, y + 1)`, then the three cells of row `x + 1`, then
//! the three cells of row `x - 1`. Off-board candidates are dropped.

use std::ops::Deref;

use crate::game::{Board, Position, Side};

/// Ownership filter applied to neighbor candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Keep every on-board neighbor.
    Any,
    /// Keep neighbors owned by the given side.
    OwnedBy(Side),
    /// Keep neighbors not owned by the given side.
    NotOwnedBy(Side),
}

impl Filter {
    /// Check whether a cell with this owner passes the filter.
    #[must_use]
    #[inline]
    pub fn accepts(self, owner: Side) -> bool {
        match self {
            Filter::Any => true,
            Filter::OwnedBy(side) => owner == side,
            Filter::NotOwnedBy(side) => owner != side,
        }
    }
}

/// Up to eight neighboring positions, stored inline.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    cells: [Position; 8],
    len: u8,
}

impl Neighbors {
    const fn empty() -> Self {
        Self {
            cells: [Position::new(0, 0); 8],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, pos: Position) {
        self.cells[usize::from(self.len)] = pos;
        self.len += 1;
    }

    fn retain(&mut self, mut keep: impl FnMut(Position) -> bool) {
        let mut kept = Self::empty();
        for &pos in self.iter() {
            if keep(pos) {
                kept.push(pos);
            }
        }
        *self = kept;
    }
}

impl Deref for Neighbors {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        &self.cells[..usize::from(self.len)]
    }
}

/// On-board neighbor candidates of `pos`, in generation order.
#[must_use]
pub(crate) fn candidates(width: u16, height: u16, pos: Position) -> Neighbors {
    let mut result = Neighbors::empty();
    let Position { x, y } = pos;
    let has_left = y > 0;
    let has_right = y + 1 < height;

    if has_left {
        result.push(Position::new(x, y - 1));
    }
    if has_right {
        result.push(Position::new(x, y + 1));
    }
    let mut row = |row_x: u16| {
        if has_left {
            result.push(Position::new(row_x, y - 1));
        }
        result.push(Position::new(row_x, y));
        if has_right {
            result.push(Position::new(row_x, y + 1));
        }
    };
    if x + 1 < width {
        row(x + 1);
    }
    if x > 0 {
        row(x - 1);
    }

    result
}

/// Neighbors of `pos` that pass `filter`.
///
/// # Panics
///
/// Panics if `pos` is off the board.
#[must_use]
pub fn neighbors(board: &Board, pos: Position, filter: Filter) -> Neighbors {
    assert!(board.in_bounds(pos), "{pos} is off the board");
    let mut result = candidates(board.width(), board.height(), pos);
    result.retain(|p| filter.accepts(board.cell(p).owner));
    result
}

/// Number of neighbors of `pos` owned by `side`.
#[must_use]
pub fn support(board: &Board, pos: Position, side: Side) -> usize {
    neighbors(board, pos, Filter::OwnedBy(side)).len()
}
