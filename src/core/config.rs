//! Game configuration types.
//!
//! - `LetterDistribution`: How many of each letter go in the bag, and what they score
//! - `GameConfig`: Seat count, rack size, bingo bonus and tile set
//!
//! Configuration is captured into `GameState` at creation, so every later
//! transition sees the same rules.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// One letter of the tile set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSpec {
    pub letter: char,
    pub count: u8,
    pub points: u8,
}

impl LetterSpec {
    #[must_use]
    pub const fn new(letter: char, count: u8, points: u8) -> Self {
        Self {
            letter,
            count,
            points,
        }
    }
}

/// Counts and point values of every tile in a fresh bag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDistribution {
    pub letters: Vec<LetterSpec>,
    /// Number of blank (joker) tiles.
    pub blanks: u8,
}

impl LetterDistribution {
    /// The standard 100-tile set: 98 letters and 2 blanks.
    #[must_use]
    pub fn standard() -> Self {
        const STANDARD: [LetterSpec; 26] = [
            LetterSpec::new('A', 9, 1),
            LetterSpec::new('B', 2, 3),
            LetterSpec::new('C', 2, 3),
            LetterSpec::new('D', 4, 2),
            LetterSpec::new('E', 12, 1),
            LetterSpec::new('F', 2, 4),
            LetterSpec::new('G', 3, 2),
            LetterSpec::new('H', 2, 4),
            LetterSpec::new('I', 9, 1),
            LetterSpec::new('J', 1, 8),
            LetterSpec::new('K', 1, 10),
            LetterSpec::new('L', 4, 1),
            LetterSpec::new('M', 2, 2),
            LetterSpec::new('N', 6, 1),
            LetterSpec::new('O', 8, 1),
            LetterSpec::new('P', 2, 3),
            LetterSpec::new('Q', 1, 8),
            LetterSpec::new('R', 6, 1),
            LetterSpec::new('S', 4, 1),
            LetterSpec::new('T', 6, 1),
            LetterSpec::new('U', 4, 1),
            LetterSpec::new('V', 2, 4),
            LetterSpec::new('W', 2, 10),
            LetterSpec::new('X', 1, 10),
            LetterSpec::new('Y', 2, 10),
            LetterSpec::new('Z', 1, 10),
        ];

        Self {
            letters: STANDARD.to_vec(),
            blanks: 2,
        }
    }

    /// Total number of tiles, constant for the life of a game.
    #[must_use]
    pub fn total(&self) -> usize {
        self.letters.iter().map(|l| usize::from(l.count)).sum::<usize>() + usize::from(self.blanks)
    }

    /// Printed point value of a letter, 0 if the letter is not in the set.
    #[must_use]
    pub fn points_for(&self, letter: char) -> u8 {
        let letter = letter.to_ascii_uppercase();
        self.letters
            .iter()
            .find(|l| l.letter == letter)
            .map_or(0, |l| l.points)
    }

    /// Materialize every tile with ids `0..total()`, letters first, blanks last.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.total());
        let mut next = 0u16;
        for spec in &self.letters {
            for _ in 0..spec.count {
                tiles.push(Tile::new(TileId(next), spec.letter, spec.points));
                next += 1;
            }
        }
        for _ in 0..self.blanks {
            tiles.push(Tile::joker(TileId(next)));
            next += 1;
        }
        tiles
    }
}

impl Default for LetterDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats needed before the game starts on its own.
    pub min_players: usize,

    /// Rack capacity. Placing exactly this many tiles earns the bingo bonus.
    pub rack_size: usize,

    /// Flat bonus for playing a full rack in one move.
    pub bingo_bonus: i32,

    /// Tile set used to fill the bag.
    pub distribution: LetterDistribution,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            rack_size: 7,
            bingo_bonus: 50,
            distribution: LetterDistribution::standard(),
        }
    }
}

impl GameConfig {
    /// Set the auto-start seat count (2-4).
    #[must_use]
    pub fn with_min_players(mut self, count: usize) -> Self {
        assert!((2..=4).contains(&count), "Player count must be 2-4");
        self.min_players = count;
        self
    }

    /// Set rack capacity.
    #[must_use]
    pub fn with_rack_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Rack must hold at least 1 tile");
        self.rack_size = size;
        self
    }

    /// Set the full-rack bonus.
    #[must_use]
    pub fn with_bingo_bonus(mut self, bonus: i32) -> Self {
        self.bingo_bonus = bonus;
        self
    }

    /// Replace the tile set.
    #[must_use]
    pub fn with_distribution(mut self, distribution: LetterDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Check that a full table can be dealt from a fresh bag.
    ///
    /// Panics otherwise; a config that cannot deal is a programming error.
    pub fn validate(&self) {
        assert!(
            self.min_players * self.rack_size <= self.distribution.total(),
            "Tile set too small to deal {} racks of {}",
            self.min_players,
            self.rack_size
        );
        assert!(
            self.distribution.total() <= usize::from(u16::MAX),
            "Tile set too large"
        );
    }
}
