//! Benchmarks for move resolution and full-board probes.
//!
//! The probe resolves one move per cell, so it is the hot path for any
//! caller that shows legal moves.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use outpost::{GameState, Position, Side, apply_move, probe_board};

/// Midgame position on the default board: both sides grown a few cells out
/// from their camps.
fn midgame() -> GameState {
    let mut state = GameState::new(11, 11).unwrap();
    let moves = [
        (Side::Green, 10, 9),
        (Side::Red, 0, 1),
        (Side::Green, 9, 9),
        (Side::Red, 1, 1),
        (Side::Green, 9, 8),
        (Side::Red, 2, 2),
        (Side::Green, 8, 8),
        (Side::Red, 3, 3),
        (Side::Green, 7, 7),
        (Side::Red, 4, 4),
        (Side::Green, 6, 6),
        (Side::Red, 5, 5),
    ];
    for (side, x, y) in moves {
        if let Ok(next) = apply_move(&state, Position::new(x, y), side) {
            state = next;
        }
    }
    state
}

fn bench_apply_move(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("apply_move_claim", |b| {
        b.iter(|| apply_move(black_box(&state), black_box(Position::new(5, 6)), Side::Red));
    });

    c.bench_function("apply_move_attack", |b| {
        b.iter(|| apply_move(black_box(&state), black_box(Position::new(6, 6)), Side::Red));
    });
}

fn bench_probe(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("probe_board_11x11", |b| {
        b.iter(|| probe_board(black_box(&state), black_box(Side::Green)));
    });
}

criterion_group!(benches, bench_apply_move, bench_probe);
criterion_main!(benches);
