//! Letter tiles.
//!
//! Every tile has a `TileId` that is unique within a game and stable while
//! the tile travels between bag, rack and board. Ids are allocated once,
//! when the bag is filled, and never reused.

use serde::{Deserialize, Serialize};

/// Letter shown on a blank tile before a letter is assigned.
pub const JOKER_LETTER: char = '_';

/// Unique identifier for a tile within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u16);

impl TileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A physical letter tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Printed letter, `JOKER_LETTER` for blanks.
    pub letter: char,
    /// Printed point value.
    pub points: u8,
    pub joker: bool,
    /// Letter a joker stands for once played.
    #[serde(default)]
    pub assigned: Option<char>,
}

impl Tile {
    /// Create a regular letter tile.
    #[must_use]
    pub fn new(id: TileId, letter: char, points: u8) -> Self {
        Self {
            id,
            letter: letter.to_ascii_uppercase(),
            points,
            joker: false,
            assigned: None,
        }
    }

    /// Create a blank tile.
    #[must_use]
    pub fn joker(id: TileId) -> Self {
        Self {
            id,
            letter: JOKER_LETTER,
            points: 0,
            joker: true,
            assigned: None,
        }
    }

    /// The same joker with a letter assigned.
    #[must_use]
    pub fn with_assigned(mut self, letter: char) -> Self {
        self.assigned = Some(letter.to_ascii_uppercase());
        self
    }

    /// Letter this tile reads as on the board.
    #[must_use]
    pub fn face(&self) -> char {
        if self.joker {
            self.assigned.unwrap_or(JOKER_LETTER)
        } else {
            self.letter
        }
    }

    /// Scoring value. Jokers are always worth 0, whatever they stand for.
    #[must_use]
    pub fn score(&self) -> i32 {
        if self.joker {
            0
        } else {
            i32::from(self.points)
        }
    }
}
