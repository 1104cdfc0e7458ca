//! The shared pool of undrawn tiles.
//!
//! The bag is a multiset; its internal order carries no meaning. Draws pick
//! uniformly at random and returns are scattered to random positions, so a
//! tile put back cannot be predicted from the order it went in.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::LetterDistribution;
use crate::core::rng::GameRng;
use crate::core::tile::Tile;

/// Undrawn tiles.
///
/// ## Usage
///
/// ```
/// use rust_wordgrid::bag::TileBag;
/// use rust_wordgrid::core::{GameRng, LetterDistribution};
///
/// let mut rng = GameRng::new(42);
/// let mut bag = TileBag::filled(&LetterDistribution::standard(), &mut rng);
///
/// let rack = bag.draw(7, &mut rng);
/// assert_eq!(rack.len(), 7);
/// assert_eq!(bag.len(), 93);
///
/// bag.return_tiles(rack, &mut rng);
/// assert_eq!(bag.len(), 100);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vector<Tile>,
}

impl TileBag {
    /// An empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A bag holding every tile of the distribution, shuffled.
    #[must_use]
    pub fn filled(distribution: &LetterDistribution, rng: &mut GameRng) -> Self {
        let mut tiles = distribution.tiles();
        rng.shuffle(&mut tiles);
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles currently in the bag (order is not meaningful).
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Remove up to `n` tiles uniformly at random, without replacement.
    ///
    /// Returns fewer than `n` (possibly none) when the bag runs short.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Tile> {
        let count = n.min(self.tiles.len());
        (0..count)
            .map(|_| {
                let index = rng.gen_index(self.tiles.len());
                self.tiles.remove(index)
            })
            .collect()
    }

    /// Put tiles back, each at a random position.
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>, rng: &mut GameRng) {
        for tile in tiles {
            let index = rng.gen_insert_index(self.tiles.len());
            self.tiles.insert(index, tile);
        }
    }

    /// Check if the bag contains a tile with this id.
    #[must_use]
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.iter().any(|t| t.id == tile.id)
    }

    /// Pull out the first tile matching `pred`, for rigging racks in tests.
    #[cfg(test)]
    pub(crate) fn take_where(&mut self, pred: impl Fn(&Tile) -> bool) -> Option<Tile> {
        let index = self.tiles.iter().position(pred)?;
        Some(self.tiles.remove(index))
    }
}

impl FromIterator<Tile> for TileBag {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
