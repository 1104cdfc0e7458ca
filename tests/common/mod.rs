//! Shared helpers for integration tests.
//!
//! Tests cannot rig racks from outside the crate, so moves are built from
//! whatever the current player holds, against a dictionary that accepts
//! everything.

#![allow(dead_code)]

use rust_wordgrid::board::Board;
use rust_wordgrid::core::{
    Action, GameConfig, GameId, GameState, Placement, PlayerId, PlayerProfile, Tile, TileId,
};
use rust_wordgrid::rules::Engine;
use rust_wordgrid::Position;

/// Dictionary that accepts every word.
pub type Lenient = fn(&str) -> bool;

pub fn accept_all(_: &str) -> bool {
    true
}

pub fn engine() -> Engine<Lenient> {
    Engine::new(accept_all as Lenient)
}

/// A game with `players` seated, started if that reaches the threshold.
pub fn new_game(seed: u64, players: usize) -> GameState {
    let config = GameConfig::default().with_min_players(players);
    let mut state = GameState::new(
        GameId::new("TEST"),
        PlayerProfile::new("p0", "Player 0"),
        config,
        seed,
    );
    for i in 1..players {
        let profile = PlayerProfile::new(format!("p{i}"), format!("Player {i}"));
        let actor = profile.id.clone();
        state = engine()
            .apply(&state, &actor, &Action::Join { profile })
            .unwrap();
    }
    state
}

pub fn current(state: &GameState) -> PlayerId {
    state.current_player().unwrap().id.clone()
}

pub fn rack_of(state: &GameState, player: &PlayerId) -> Vec<Tile> {
    state.player(player).unwrap().rack.iter().cloned().collect()
}

/// Place `tile` on `pos`, assigning `E` to jokers.
pub fn place(tile: &Tile, pos: Position) -> Placement {
    if tile.joker {
        Placement::joker(tile.id, pos, 'E')
    } else {
        Placement::new(tile.id, pos)
    }
}

/// First `n` rack tiles of the current player laid left to right from `start`.
pub fn lay_row(state: &GameState, n: usize, start: Position) -> Vec<Placement> {
    let rack = rack_of(state, &current(state));
    rack.iter()
        .take(n)
        .enumerate()
        .map(|(i, tile)| place(tile, Position::new(start.row, start.col + i as u8)))
        .collect()
}

/// A single-tile move next to an existing tile, or an opening pair on the
/// centre when the board is empty. `None` when the rack is empty.
pub fn simple_move(state: &GameState) -> Option<Vec<Placement>> {
    let rack = rack_of(state, &current(state));
    let board = state.board();

    if !board.has_locked_tiles() {
        return (rack.len() >= 2).then(|| lay_row(state, 2, Position::new(7, 7)));
    }

    let tile = rack.first()?;
    let square = free_neighbour(board)?;
    Some(vec![place(tile, square)])
}

/// First empty square, in row-major order, touching a locked tile.
pub fn free_neighbour(board: &Board) -> Option<Position> {
    Position::all()
        .filter(|pos| board.is_locked(*pos))
        .flat_map(Position::neighbors)
        .find(|pos| !board.is_occupied(*pos))
}

/// Every tile id the state knows about: bag, racks and board.
pub fn all_tile_ids(state: &GameState) -> Vec<TileId> {
    let mut ids: Vec<TileId> = state.bag().iter().map(|t| t.id).collect();
    for player in state.players() {
        ids.extend(player.rack.iter().map(|t| t.id));
    }
    ids.extend(state.board().occupied().map(|(_, t)| t.id));
    ids.sort();
    ids
}
