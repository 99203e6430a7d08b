//! Whole-board legality probe.
//!
//! Runs the resolver against every cell for one side without committing
//! anything, and records the verdict per cell. Rows are probed in parallel
//! with rayon; each probe reads the shared state and builds its own copy.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Rejection;
use crate::game::{check_move, GameState, Position, Side};

/// Verdict for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "lowercase")]
pub enum Verdict {
    /// The side may play here.
    Legal,
    /// The move would be refused.
    Rejected(Rejection),
}

impl From<Result<(), Rejection>> for Verdict {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Verdict::Legal,
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }
}

/// Verdicts for every cell of a board, for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Probe {
    /// The side the probe was run for.
    pub side: Side,
    width: u16,
    height: u16,
    verdicts: Vec<Verdict>,
}

impl Probe {
    /// Verdict at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the probed board.
    #[must_use]
    pub fn verdict(&self, pos: Position) -> Verdict {
        assert!(pos.x < self.width && pos.y < self.height, "{pos} is off the board");
        self.verdicts[usize::from(pos.x) * usize::from(self.height) + usize::from(pos.y)]
    }

    /// Verdicts of one row.
    #[must_use]
    pub fn row(&self, x: u16) -> &[Verdict] {
        let height = usize::from(self.height);
        let start = usize::from(x) * height;
        &self.verdicts[start..start + height]
    }

    /// Board width the probe covers.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Board height the probe covers.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Positions where the side may play, row by row.
    #[must_use]
    pub fn legal_positions(&self) -> Vec<Position> {
        (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .filter(|&pos| self.verdict(pos) == Verdict::Legal)
            .collect()
    }

    /// Number of cells refused for `rejection`.
    #[must_use]
    pub fn count_rejected(&self, rejection: Rejection) -> usize {
        self.verdicts
            .iter()
            .filter(|&&v| v == Verdict::Rejected(rejection))
            .count()
    }
}

/// Probe every cell of `state` for `side`.
///
/// Probing as [`Side::Unclaimed`] marks every cell legal, matching the
/// resolver's no-op.
#[must_use]
pub fn probe_board(state: &GameState, side: Side) -> Probe {
    let width = state.board.width();
    let height = state.board.height();

    let verdicts = (0..width)
        .into_par_iter()
        .flat_map_iter(|x| {
            (0..height).map(move |y| Verdict::from(check_move(state, Position::new(x, y), side)))
        })
        .collect();

    Probe {
        side,
        width,
        height,
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FrozenPair;

    #[test]
    fn test_opening_probe_for_red() {
        let state = GameState::new(4, 4).unwrap();
        let probe = probe_board(&state, Side::Red);

        assert_eq!(
            probe.legal_positions(),
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
        assert_eq!(
            probe.verdict(Position::new(0, 0)),
            Verdict::Rejected(Rejection::CannotTargetOwnCamp)
        );
        assert_eq!(
            probe.verdict(Position::new(3, 3)),
            Verdict::Rejected(Rejection::NoAdjacentSupport)
        );
        assert_eq!(probe.count_rejected(Rejection::NoPathToCamp), 11);
    }

    #[test]
    fn test_probe_does_not_commit() {
        let state = GameState::new(3, 3).unwrap();
        let before = state.clone();
        let _ = probe_board(&state, Side::Green);
        assert_eq!(state, before);
    }

    #[test]
    fn test_probe_reports_frozen() {
        let mut state = GameState::new(3, 3).unwrap();
        state.frozen = FrozenPair::from_slots(Some(Position::new(1, 1)), None);
        let probe = probe_board(&state, Side::Red);
        assert_eq!(probe.verdict(Position::new(1, 1)), Verdict::Rejected(Rejection::Frozen));
        assert_eq!(probe.row(1)[1], Verdict::Rejected(Rejection::Frozen));
    }

    #[test]
    fn test_neutral_probe_is_all_legal() {
        let state = GameState::new(3, 3).unwrap();
        let probe = probe_board(&state, Side::Unclaimed);
        assert_eq!(probe.legal_positions().len(), 9);
    }

    #[test]
    fn test_verdict_json() {
        let json = serde_json::to_string(&Verdict::Rejected(Rejection::Frozen)).unwrap();
        assert_eq!(json, r#"{"verdict":"rejected","reason":"FROZEN"}"#);
        assert_eq!(serde_json::to_string(&Verdict::Legal).unwrap(), r#"{"verdict":"legal"}"#);
    }
}
