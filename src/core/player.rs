//! Player identification and per-seat data.
//!
//! ## PlayerId
//!
//! Opaque identifier issued by the external account subsystem. The engine
//! never sees credentials, only `(id, display name)` snapshots.
//!
//! ## Player
//!
//! A seat at the table: score, rack and turn marker.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// Account-level player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identity snapshot supplied by the account subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerProfile {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

/// A seated player.
///
/// The rack is ordered (draw order) and holds at most `rack_size` tiles.
/// Score is signed: end-of-game deductions can push it below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    pub rack: Vector<Tile>,
    /// True while it is this player's turn.
    pub active: bool,
}

impl Player {
    /// Seat a player with an empty rack.
    #[must_use]
    pub fn new(profile: PlayerProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            score: 0,
            rack: Vector::new(),
            active: false,
        }
    }

    /// Look up a rack tile by id.
    #[must_use]
    pub fn rack_tile(&self, id: TileId) -> Option<&Tile> {
        self.rack.iter().find(|t| t.id == id)
    }

    /// Remove the given tiles from the rack, keeping the order of the rest.
    pub fn remove_from_rack(&mut self, ids: &[TileId]) {
        self.rack.retain(|t| !ids.contains(&t.id));
    }

    /// Sum of face values left on the rack.
    #[must_use]
    pub fn rack_points(&self) -> i32 {
        self.rack.iter().map(Tile::score).sum()
    }
}
