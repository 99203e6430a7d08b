//! Move resolution scenarios on hand-built boards.
//!
//! Each scenario starts from a small board in the textual format and checks
//! the exact outcome of one move: the rejection code, or the resulting cell
//! and frozen pair.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use outpost::game::{is_reachable, Passable};
use outpost::{apply_move, Board, Cell, FrozenPair, GameState, Player, Position, Rejection, Side};

/// Red camp at (0, 0), green camp at (3, 3), (3, 2) frozen.
const MIDGAME: &str = "R5 . . .\n. R5 . .\n. R0 G4 .\n. G5 G5 G5";

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

fn midgame() -> GameState {
    GameState::from_parts(
        board(MIDGAME),
        FrozenPair::from_slots(Some(Position::new(3, 2)), None),
    )
}

fn at(x: u16, y: u16) -> Position {
    Position::new(x, y)
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_frozen_cell_rejected() {
    assert_eq!(apply_move(&midgame(), at(3, 2), Side::Green), Err(Rejection::Frozen));
    assert_eq!(apply_move(&midgame(), at(3, 2), Side::Red), Err(Rejection::Frozen));
}

#[test]
fn test_claim_walling_own_camp_rejected() {
    assert_eq!(
        apply_move(&midgame(), at(2, 3), Side::Green),
        Err(Rejection::EnclosesOpponentCamp)
    );
}

#[test]
fn test_claim_without_path_rejected() {
    assert_eq!(apply_move(&midgame(), at(1, 0), Side::Green), Err(Rejection::NoPathToCamp));
}

#[test]
fn test_attack_without_support_rejected() {
    assert_eq!(
        apply_move(&midgame(), at(0, 0), Side::Green),
        Err(Rejection::NoAdjacentSupport)
    );
}

#[test]
fn test_own_camp_rejected_for_both_sides() {
    assert_eq!(
        apply_move(&midgame(), at(0, 0), Side::Red),
        Err(Rejection::CannotTargetOwnCamp)
    );
    assert_eq!(
        apply_move(&midgame(), at(3, 3), Side::Green),
        Err(Rejection::CannotTargetOwnCamp)
    );
}

#[test]
fn test_rejection_leaves_input_untouched() {
    let before = midgame();
    let snapshot = before.clone();
    let _ = apply_move(&before, at(2, 3), Side::Green);
    let _ = apply_move(&before, at(1, 0), Side::Green);
    assert_eq!(before, snapshot);
}

// =============================================================================
// Accepted moves
// =============================================================================

#[test]
fn test_reinforce_with_three_supporters() {
    let next = apply_move(&midgame(), at(2, 2), Side::Green).unwrap();
    assert_eq!(next.board.cell(at(2, 2)), &Cell::owned(Player::Green, 5));
    assert_eq!(next.frozen.slots(), [None, Some(at(2, 2))]);
}

#[test]
fn test_claim_next_to_camp() {
    let next = apply_move(&midgame(), at(0, 1), Side::Red).unwrap();
    assert_eq!(next.board.cell(at(0, 1)), &Cell::owned(Player::Red, 6));
    assert_eq!(next.frozen.slots(), [None, None]);
}

#[test]
fn test_attack_with_one_supporter() {
    let next = apply_move(&midgame(), at(1, 1), Side::Green).unwrap();
    assert_eq!(next.board.cell(at(1, 1)), &Cell::owned(Player::Red, 4));
    assert_eq!(next.frozen.slots(), [None, Some(at(1, 1))]);
}

#[test]
fn test_neutral_move_changes_nothing() {
    let state = midgame();
    assert_eq!(apply_move(&state, at(1, 2), Side::Unclaimed), Ok(state.clone()));
}

#[test]
fn test_attack_down_to_zero_keeps_owner() {
    let state = GameState::from_parts(board("R6 . .\n. G1 .\n. . G6"), FrozenPair::new());

    let next = apply_move(&state, at(1, 1), Side::Red).unwrap();
    assert_eq!(next.board.cell(at(1, 1)), &Cell::owned(Player::Green, 0));
}

#[test]
fn test_capture_score_is_overflow_plus_bonus() {
    let state = GameState::from_parts(board("R6 . .\n. G0 .\n. . G6"), FrozenPair::new());

    let next = apply_move(&state, at(1, 1), Side::Red).unwrap();
    assert_eq!(next.board.cell(at(1, 1)), &Cell::owned(Player::Red, 1 + outpost::game::CAPTURE_BONUS));
}

#[test]
fn test_capture_disconnects_enemy_cells() {
    let state = GameState::from_parts(
        board("R5 . . .\n. R5 . .\n. R0 . .\n. G5 G0 G5"),
        FrozenPair::new(),
    );

    let next = apply_move(&state, at(3, 2), Side::Red).unwrap();

    assert_eq!(next.board.cell(at(3, 2)), &Cell::owned(Player::Red, 4));
    assert_eq!(next.board.cell(at(3, 1)), &Cell::UNCLAIMED);
    assert_eq!(next.board.cell(at(3, 3)), &Cell::owned(Player::Green, 5));
    assert_eq!(next.frozen.slots(), [None, Some(at(3, 2))]);
    assert!(outpost::game::check_invariants(&next).is_empty());
}

#[test]
fn test_attack_with_four_supporters() {
    let state = GameState::from_parts(
        board("R5 . . .\n. R5 G5 .\nR5 R5 G5 .\n. G5 G5 G5"),
        FrozenPair::from_slots(Some(at(3, 2)), None),
    );

    let next = apply_move(&state, at(2, 1), Side::Green).unwrap();
    assert_eq!(next.board.cell(at(2, 1)), &Cell::owned(Player::Red, 3));
    assert_eq!(next.frozen.slots(), [None, Some(at(2, 1))]);
}

#[test]
fn test_reinforce_with_four_supporters() {
    let state = GameState::from_parts(
        board("R5 . . .\n. R5 G5 .\nR5 G5 G5 .\n. G5 G5 G5"),
        FrozenPair::from_slots(Some(at(3, 2)), None),
    );

    let next = apply_move(&state, at(2, 1), Side::Green).unwrap();
    assert_eq!(next.board.cell(at(2, 1)), &Cell::owned(Player::Green, 7));
}

#[test]
fn test_capture_cascades_through_single_link() {
    // Green's (2, 0) and (2, 1) hang off the camp only through (2, 2).
    let state = GameState::from_parts(
        board("R6 R5 . . .\n. . R5 . .\nG1 G1 G0 . .\n. . . G1 G6"),
        FrozenPair::new(),
    );

    let next = apply_move(&state, at(2, 2), Side::Red).unwrap();

    assert_eq!(next.board.cell(at(2, 2)), &Cell::owned(Player::Red, 4));
    assert_eq!(next.board.cell(at(2, 0)), &Cell::UNCLAIMED);
    assert_eq!(next.board.cell(at(2, 1)), &Cell::UNCLAIMED);
    assert_eq!(next.board.cell(at(3, 3)), &Cell::owned(Player::Green, 1));
    assert_eq!(next.board.count_owned(Side::Green), 2);
    assert!(outpost::game::check_invariants(&next).is_empty());
}

#[test]
fn test_capture_that_walls_in_camp_rolls_back_cleanup() {
    // Capturing (2, 1) strands green's (2, 0), but red's camp is then boxed
    // in by its own cells, so the whole move is refused.
    let state = GameState::from_parts(
        board("R6 R1 R1 R1\nR1 R1 R1 R1\nG1 G0 G1 G6"),
        FrozenPair::from_slots(Some(at(1, 3)), None),
    );
    let snapshot = state.clone();

    assert_eq!(
        apply_move(&state, at(2, 1), Side::Red),
        Err(Rejection::EnclosesOpponentCamp)
    );
    assert_eq!(state, snapshot);
    assert_eq!(state.board.cell(at(2, 0)), &Cell::owned(Player::Green, 1));
    assert_eq!(state.frozen.slots(), [Some(at(1, 3)), None]);
}

#[test]
fn test_frozen_cell_thaws_after_two_touches() {
    let mut state = GameState::from_parts(board("R6 R6 .\n. . .\n. G6 G6"), FrozenPair::new());

    state = apply_move(&state, at(0, 1), Side::Red).unwrap();
    assert_eq!(apply_move(&state, at(0, 1), Side::Green), Err(Rejection::Frozen));

    state = apply_move(&state, at(2, 1), Side::Green).unwrap();
    assert_eq!(apply_move(&state, at(0, 1), Side::Red), Err(Rejection::Frozen));

    state = apply_move(&state, at(1, 0), Side::Red).unwrap();
    assert!(!state.frozen.contains(at(0, 1)));

    let next = apply_move(&state, at(0, 1), Side::Red).unwrap();
    assert_eq!(next.board.cell(at(0, 1)), &Cell::owned(Player::Red, 8));
}

// =============================================================================
// Reachability
// =============================================================================

#[test]
fn test_reachable_along_own_chain() {
    let b = board("R5 R5 . .\n. R5 . .\n. . . .\n. . . G5");
    assert!(is_reachable(&b, Passable::Owner(Side::Red), at(0, 0), &[at(1, 1)]));
    assert!(is_reachable(&b, Passable::Owner(Side::Red), at(0, 0), &[at(2, 2)]));
    assert!(!is_reachable(&b, Passable::Owner(Side::Red), at(0, 0), &[at(3, 0)]));
}

#[test]
fn test_reachable_one_to_many() {
    let b = board("R5 . .\n. . .\n. . G5");
    let targets = [at(0, 2), at(1, 1), at(2, 0), at(2, 2)];
    assert!(is_reachable(&b, Passable::NotOwner(Side::Red), at(0, 0), &targets));
}

#[test]
fn test_reachable_around_a_wall() {
    let b = board("R5 . R5 .\nR5 R5 R5 .\n. . . .\n. . . G5");
    assert!(is_reachable(
        &b,
        Passable::NotOwner(Side::Red),
        at(3, 3),
        &[at(0, 3), at(2, 0), at(3, 0)]
    ));
    assert!(!is_reachable(&b, Passable::NotOwner(Side::Red), at(3, 3), &[at(0, 1)]));
}
