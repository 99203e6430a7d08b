//! Board, cell and position types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Score given to a freshly claimed cell.
pub const INIT_SCORE: u32 = 6;

/// Starting score of both home corners.
pub const CAMP_INIT_SCORE: u32 = 6;

/// Added to the overflow of an attack that captures a cell.
pub const CAPTURE_BONUS: u32 = 3;

/// Owner of a cell, and the acting side of a move.
///
/// `Unclaimed` doubles as the "no move" side: submitting a move as
/// `Unclaimed` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Nobody owns the cell.
    #[default]
    Unclaimed,
    /// The player whose camp is the first corner.
    Red,
    /// The player whose camp is the last corner.
    Green,
}

impl Side {
    /// Wire code of this side (1 = unclaimed, 2 = red, 3 = green).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Side::Unclaimed => 1,
            Side::Red => 2,
            Side::Green => 3,
        }
    }

    /// The playing side behind this owner, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Side::Unclaimed => None,
            Side::Red => Some(Player::Red),
            Side::Green => Some(Player::Green),
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Side::Unclaimed),
            2 => Ok(Side::Red),
            3 => Ok(Side::Green),
            other => Err(EngineError::UnknownSide(other)),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Unclaimed => f.pad("unclaimed"),
            Side::Red => f.pad("red"),
            Side::Green => f.pad("green"),
        }
    }
}

/// One of the two playing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Camp at `(0, 0)`.
    Red,
    /// Camp at `(width - 1, height - 1)`.
    Green,
}

impl Player {
    /// Both players, red first.
    pub const BOTH: [Player; 2] = [Player::Red, Player::Green];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }

    /// The cell owner value for this player.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Player::Red => Side::Red,
            Player::Green => Side::Green,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.side(), f)
    }
}

/// A position on the board.
///
/// `x` selects the row (`0..width`) and `y` the cell within it (`0..height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub x: u16,
    /// Column index.
    pub y: u16,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    /// Who owns the cell.
    pub owner: Side,
    /// Strength. Always 0 while unclaimed.
    pub score: u32,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Side::Unclaimed => f.pad("."),
            Side::Red => f.pad(&format!("R{}", self.score)),
            Side::Green => f.pad(&format!("G{}", self.score)),
        }
    }
}

impl Cell {
    /// An unclaimed cell.
    pub const UNCLAIMED: Cell = Cell {
        owner: Side::Unclaimed,
        score: 0,
    };

    /// A cell owned by `player` with the given score.
    #[must_use]
    pub const fn owned(player: Player, score: u32) -> Self {
        Self {
            owner: player.side(),
            score,
        }
    }
}

/// The game board.
///
/// Dimensions are fixed at creation. Cells are stored row by row
/// (`x` major), so index = `x * height + y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-unclaimed board.
    ///
    /// Camps are not placed; see [`crate::game::GameState::new`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BoardTooSmall`] if either dimension is below 2.
    pub fn new(width: u16, height: u16) -> Result<Self, EngineError> {
        if width < 2 || height < 2 {
            return Err(EngineError::BoardTooSmall { width, height });
        }
        let size = usize::from(width) * usize::from(height);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::UNCLAIMED; size],
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of cells per row.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; boards are at least 2x2.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if a position is on the board.
    #[must_use]
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Bounds-checked position constructor.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if `(x, y)` is off the board.
    pub fn position(&self, x: u16, y: u16) -> Result<Position, EngineError> {
        let pos = Position::new(x, y);
        if self.in_bounds(pos) {
            Ok(pos)
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    pub(crate) fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos), "{pos} is off the board");
        usize::from(pos.x) * usize::from(self.height) + usize::from(pos.y)
    }

    #[inline]
    fn position_at(&self, idx: usize) -> Position {
        let height = usize::from(self.height);
        #[allow(clippy::cast_possible_truncation)]
        Position::new((idx / height) as u16, (idx % height) as u16)
    }

    /// The cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Positions are expected to be derived
    /// from the board's own dimensions.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> &Cell {
        assert!(self.in_bounds(pos), "{pos} is off the board");
        &self.cells[self.index(pos)]
    }

    /// The cell at `pos`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.in_bounds(pos).then(|| &self.cells[self.index(pos)])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        assert!(self.in_bounds(pos), "{pos} is off the board");
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    /// Home corner of `player`.
    #[must_use]
    pub const fn camp(&self, player: Player) -> Position {
        match player {
            Player::Red => Position::new(0, 0),
            Player::Green => Position::new(self.width - 1, self.height - 1),
        }
    }

    /// The player whose camp sits at `pos`, if any.
    #[must_use]
    pub fn camp_owner(&self, pos: Position) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.camp(p) == pos)
    }

    /// Iterate over all positions and cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (self.position_at(idx), cell))
    }

    /// Iterate over the cells of one row.
    pub fn row(&self, x: u16) -> impl Iterator<Item = &Cell> + '_ {
        let height = usize::from(self.height);
        let start = usize::from(x) * height;
        self.cells[start..start + height].iter()
    }

    /// Positions currently owned by `owner`.
    pub fn positions_owned_by(&self, owner: Side) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(_, cell)| cell.owner == owner)
            .map(|(pos, _)| pos)
    }

    /// Count of cells owned by `owner`.
    #[must_use]
    pub fn count_owned(&self, owner: Side) -> usize {
        self.cells.iter().filter(|cell| cell.owner == owner).count()
    }

    /// Sum of scores over cells owned by `player`.
    #[must_use]
    pub fn total_score(&self, player: Player) -> u64 {
        self.cells
            .iter()
            .filter(|cell| cell.owner == player.side())
            .map(|cell| u64::from(cell.score))
            .sum()
    }
}

/// Textual form: one line per row, whitespace-separated tokens.
/// `.` is unclaimed, `R<score>` is red and `G<score>` is green.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.width {
            let tokens: Vec<String> = self.row(x).map(ToString::to_string).collect();
            writeln!(f, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}

fn parse_token(token: &str) -> Result<Cell, EngineError> {
    if token == "." {
        return Ok(Cell::UNCLAIMED);
    }
    let player = match token.as_bytes().first() {
        Some(b'R') => Player::Red,
        Some(b'G') => Player::Green,
        _ => return Err(EngineError::MalformedBoard(format!("bad cell token {token:?}"))),
    };
    let score = token[1..]
        .parse::<u32>()
        .map_err(|e| EngineError::MalformedBoard(format!("bad score in {token:?}: {e}")))?;
    Ok(Cell::owned(player, score))
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Cell>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().map(parse_token).collect())
            .collect::<Result<_, _>>()?;

        let height = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != height) {
            return Err(EngineError::MalformedBoard("rows differ in length".to_string()));
        }
        let width = u16::try_from(rows.len())
            .map_err(|_| EngineError::MalformedBoard("too many rows".to_string()))?;
        let height = u16::try_from(height)
            .map_err(|_| EngineError::MalformedBoard("rows too long".to_string()))?;

        let mut board = Board::new(width, height)?;
        board.cells = rows.into_iter().flatten().collect();
        Ok(board)
    }
}
