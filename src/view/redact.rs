//! Per-viewer projection of the authoritative state.
//!
//! A `PublicState` has no field that could carry a rack or the bag: the
//! types make a leak unrepresentable rather than relying on blanking.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::core::action::Move;
use crate::core::player::{Player, PlayerId};
use crate::core::state::{EndReason, GameId, GameState, GameStatus};
use crate::core::tile::Tile;

/// What every client may see about a seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlayer {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    /// Number of tiles held, never which.
    pub rack_size: usize,
    pub active: bool,
}

impl From<&Player> for PublicPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            score: player.score,
            rack_size: player.rack.len(),
            active: player.active,
        }
    }
}

/// Game state safe to send to any client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub id: GameId,
    pub host: PlayerId,
    pub board: Board,
    pub players: Vec<PublicPlayer>,
    /// Tiles left in the bag. Contents are never disclosed.
    pub bag_remaining: usize,
    pub moves: Vector<Move>,
    pub status: GameStatus,
    pub turn_number: u32,
    pub current_player_index: usize,
    pub last_placed: Vec<Position>,
    pub consecutive_passes: u32,
    pub end_reason: Option<EndReason>,
}

/// Project `state` for `viewer`: the shared view plus the viewer's own rack.
///
/// A viewer who is not seated (a spectator) gets an empty rack.
#[must_use]
pub fn redact(state: &GameState, viewer: &PlayerId) -> (PublicState, Vec<Tile>) {
    let rack = state
        .player(viewer)
        .map(|p| p.rack.iter().cloned().collect())
        .unwrap_or_default();

    let public = PublicState {
        id: state.id().clone(),
        host: state.host().clone(),
        board: state.board().clone(),
        players: state.players().iter().map(PublicPlayer::from).collect(),
        bag_remaining: state.bag().len(),
        moves: state.moves().clone(),
        status: state.status(),
        turn_number: state.turn_number(),
        current_player_index: state.current_player_index(),
        last_placed: state.last_placed().to_vec(),
        consecutive_passes: state.consecutive_passes(),
        end_reason: state.end_reason(),
    };

    (public, rack)
}
