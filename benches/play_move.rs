//! Benchmark for the move pipeline
//!
//! Measures accepted and refused `play_move`, plus redaction and snapshots
//! of a mid-game state.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_wordgrid::core::{Action, GameConfig, GameId, GameState, Placement, PlayerId, PlayerProfile};
use rust_wordgrid::rules::Engine;
use rust_wordgrid::view::redact;
use rust_wordgrid::Position;

type Lenient = fn(&str) -> bool;

fn accept_all(_: &str) -> bool {
    true
}

fn engine() -> Engine<Lenient> {
    Engine::new(accept_all as Lenient)
}

fn started() -> GameState {
    let state = GameState::new(
        GameId::new("BNCH"),
        PlayerProfile::new("p1", "Alpha"),
        GameConfig::default(),
        42,
    );
    let guest = PlayerProfile::new("p2", "Beta");
    let actor = guest.id.clone();
    engine()
        .apply(&state, &actor, &Action::Join { profile: guest })
        .unwrap()
}

fn current(state: &GameState) -> PlayerId {
    state.current_player().unwrap().id.clone()
}

/// Current player's first `n` tiles laid across from `(row, col)`.
fn row_move(state: &GameState, n: usize, row: u8, col: u8) -> Vec<Placement> {
    state
        .current_player()
        .unwrap()
        .rack
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, tile)| {
            let pos = Position::new(row, col + i as u8);
            if tile.joker {
                Placement::joker(tile.id, pos, 'E')
            } else {
                Placement::new(tile.id, pos)
            }
        })
        .collect()
}

/// A few turns in, so the board and history are not empty.
fn mid_game() -> GameState {
    let engine = engine();
    let mut state = started();
    for row in [7u8, 8, 9, 10] {
        let actor = current(&state);
        let placements = row_move(&state, 2, row, 7);
        state = engine
            .apply(&state, &actor, &Action::play(&placements))
            .unwrap();
    }
    state
}

fn bench_opening_move(c: &mut Criterion) {
    let engine = engine();
    let state = started();
    let actor = current(&state);
    let placements = row_move(&state, 7, 7, 4);

    c.bench_function("play_move_opening_seven", |b| {
        b.iter(|| {
            let next = engine.play_move(black_box(&state), &actor, black_box(&placements));
            black_box(next)
        })
    });
}

fn bench_refused_move(c: &mut Criterion) {
    let engine = engine();
    let state = started();
    let actor = current(&state);
    let placements = row_move(&state, 3, 2, 2);

    c.bench_function("play_move_refused", |b| {
        b.iter(|| {
            let err = engine.play_move(black_box(&state), &actor, black_box(&placements));
            black_box(err)
        })
    });
}

fn bench_redact(c: &mut Criterion) {
    let state = mid_game();
    let viewer = current(&state);

    c.bench_function("redact_mid_game", |b| {
        b.iter(|| black_box(redact(black_box(&state), &viewer)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = mid_game();

    c.bench_function("snapshot_round_trip", |b| {
        b.iter(|| {
            let bytes = black_box(&state).to_snapshot().unwrap();
            black_box(GameState::from_snapshot(&bytes).unwrap())
        })
    });
}

criterion_group!(benches, bench_opening_move, bench_refused_move, bench_redact, bench_snapshot);
criterion_main!(benches);
