//! Word discovery on a candidate board.
//!
//! Every word a move forms runs through at least one newly placed tile, so
//! it is enough to walk both orientations from each placed square.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::core::tile::Tile;

/// Reading direction of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(dr, dc)` along the reading direction.
    #[must_use]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A maximal run of two or more tiles that includes a placed tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub start: Position,
    pub orientation: Orientation,
    /// Tiles in reading order with their squares.
    pub tiles: Vec<(Position, Tile)>,
}

impl FoundWord {
    /// The word as read on the board, jokers showing their assigned letter.
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(|(_, t)| t.face()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// All words formed by placing tiles on `placed` squares of `candidate`.
///
/// Each (start, orientation) pair is reported once, in discovery order.
/// Empty when the move forms nothing of length two or more.
#[must_use]
pub fn find_words(candidate: &Board, placed: &[Position]) -> Vec<FoundWord> {
    let mut seen: FxHashSet<(Position, Orientation)> = FxHashSet::default();
    let mut words = Vec::new();

    for &pos in placed {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let Some(word) = run_through(candidate, pos, orientation) else {
                continue;
            };
            if seen.insert((word.start, word.orientation)) {
                words.push(word);
            }
        }
    }

    words
}

/// Maximal contiguous run through `pos`, if it is at least two long.
fn run_through(board: &Board, pos: Position, orientation: Orientation) -> Option<FoundWord> {
    let (dr, dc) = orientation.step();

    let mut start = pos;
    while let Some(prev) = start.offset(-dr, -dc).filter(|p| board.is_occupied(*p)) {
        start = prev;
    }

    let mut tiles = Vec::new();
    let mut cursor = Some(start);
    while let Some(at) = cursor {
        let Some(tile) = board.tile_at(at) else { break };
        tiles.push((at, tile.clone()));
        cursor = at.offset(dr, dc);
    }

    (tiles.len() >= 2).then_some(FoundWord {
        start,
        orientation,
        tiles,
    })
}
