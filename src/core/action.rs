//! Player actions and move history.
//!
//! `Action` is a closed set: every client request is one of these variants,
//! and the engine matches on it exhaustively. On the wire it is tagged as
//! `{"type": "PLAY_MOVE", "payload": {...}}`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerId, PlayerProfile};
use super::tile::{Tile, TileId};
use crate::board::Position;

/// One tile from the mover's rack put on one square.
///
/// Only the tile id travels; letter and points are taken from the
/// authoritative rack. `assigned` names the letter a joker stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub tile: TileId,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned: Option<char>,
}

impl Placement {
    #[must_use]
    pub fn new(tile: TileId, position: Position) -> Self {
        Self {
            tile,
            position,
            assigned: None,
        }
    }

    /// Place a joker standing for `letter`.
    #[must_use]
    pub fn joker(tile: TileId, position: Position, letter: char) -> Self {
        Self {
            tile,
            position,
            assigned: Some(letter),
        }
    }
}

/// Placements of one move. Sized for a full rack without heap allocation.
pub type Placements = SmallVec<[Placement; 7]>;

/// A client request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Take a seat while the game is waiting for players.
    Join { profile: PlayerProfile },
    /// Put tiles on the board.
    PlayMove { placements: Placements },
    /// Give up the turn.
    PassTurn,
    /// Swap rack tiles for fresh ones from the bag.
    ExchangeTiles { tiles: SmallVec<[TileId; 7]> },
}

impl Action {
    /// Build a `PlayMove` from a slice of placements.
    #[must_use]
    pub fn play(placements: &[Placement]) -> Self {
        Action::PlayMove {
            placements: SmallVec::from_slice(placements),
        }
    }

    /// Build an `ExchangeTiles` from a slice of tile ids.
    #[must_use]
    pub fn exchange(tiles: &[TileId]) -> Self {
        Action::ExchangeTiles {
            tiles: SmallVec::from_slice(tiles),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Join { .. } => "join",
            Action::PlayMove { .. } => "play_move",
            Action::PassTurn => "pass_turn",
            Action::ExchangeTiles { .. } => "exchange_tiles",
        }
    }
}

/// A committed scoring move, appended to the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: PlayerId,

    /// Tiles placed, with the squares they went to.
    pub tiles: Vec<(Position, Tile)>,

    /// Points earned, bingo bonus included.
    pub score: i32,

    /// Turn number the move was played on. Stands in for a timestamp:
    /// wall-clock stamping belongs to the host.
    pub turn: u32,
}
