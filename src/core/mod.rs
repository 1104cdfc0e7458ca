//! Core types: tiles, players, actions, state, errors, RNG, configuration.
//!
//! Everything here is plain data. The rules that move a `GameState` from
//! one value to the next live in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod tile;

pub use action::{Action, Move, Placement, Placements};
pub use config::{GameConfig, LetterDistribution, LetterSpec};
pub use error::{GameError, InvalidAction, Rejection, SnapshotError};
pub use player::{Player, PlayerId, PlayerProfile};
pub use rng::{GameRng, GameRngState};
pub use state::{EndReason, GameId, GameResult, GameState, GameStatus};
pub use tile::{Tile, TileId, JOKER_LETTER};
