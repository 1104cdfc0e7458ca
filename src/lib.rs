//! # rust-wordgrid
//!
//! Authoritative rules engine for a turn-based word-placement game on a
//! 15x15 bonus grid, played by two to four remote players.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `(GameState, Action) -> Result<GameState, GameError>`.
//!    No I/O, no locks, no clock. A refused action changes nothing.
//!
//! 2. **Deterministic**: The seeded RNG lives inside the state, so replaying
//!    the same action on the same state gives the same result.
//!
//! 3. **Hidden Information Stays Inside**: `GameState` knows every rack and
//!    the bag. Clients only see what `view::redact` hands out.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`; candidate
//!   boards and next states share structure with their inputs.
//!
//! - **Injectable Dictionary**: word validity is a trait the host supplies.
//!
//! ## Modules
//!
//! - `core`: Tiles, players, actions, state, errors, RNG, configuration
//! - `board`: Grid geometry, bonus layout, candidate boards
//! - `bag`: Tile bag draw/return
//! - `rules`: Validation, word discovery, scoring, the transition engine
//! - `view`: Per-viewer redaction and server events

pub mod bag;
pub mod board;
pub mod core;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, EndReason, GameConfig, GameError, GameId, GameResult, GameRng, GameState, GameStatus,
    InvalidAction, LetterDistribution, Move, Placement, Player, PlayerId, PlayerProfile, Rejection,
    SnapshotError, Tile, TileId,
};

pub use crate::bag::TileBag;

pub use crate::board::{Board, BoardCell, Bonus, Position, CENTER};

pub use crate::rules::{Dictionary, Engine, FoundWord, WordList};

pub use crate::view::{broadcast, redact, PublicPlayer, PublicState, ServerEvent};
