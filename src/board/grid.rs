//! The playing grid: which squares hold which tiles.
//!
//! Occupants are stored in a persistent `im::HashMap` keyed by position, so
//! building a candidate board for validation is an O(1) clone plus one
//! insert per placed tile rather than a copy of all 225 squares.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{bonus_at, Bonus, Position, BOARD_SIZE};
use crate::core::tile::Tile;

/// A tile sitting on a square.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub tile: Tile,
    /// Set once the move that placed the tile is committed.
    pub locked: bool,
}

/// Full view of one square, as seen by clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell {
    pub position: Position,
    pub bonus: Bonus,
    pub tile: Option<Tile>,
    pub locked: bool,
}

/// Why a set of placements could not be merged onto a board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementConflict {
    #[error("square {0} is already occupied")]
    Occupied(Position),
    #[error("square {0} is off the board")]
    OffBoard(Position),
}

/// The 15x15 grid.
///
/// Bonus kinds come from the fixed layout; only occupants are stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BoardCell>", into = "Vec<BoardCell>")]
pub struct Board {
    cells: ImHashMap<Position, Occupant>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile on a square, if any.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.cells.get(&pos).map(|o| &o.tile)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    #[must_use]
    pub fn is_locked(&self, pos: Position) -> bool {
        self.cells.get(&pos).is_some_and(|o| o.locked)
    }

    /// True when no committed tile is on the board (first-move rule).
    #[must_use]
    pub fn has_locked_tiles(&self) -> bool {
        self.cells.values().any(|o| o.locked)
    }

    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.cells.values().filter(|o| o.locked).count()
    }

    /// Full description of a square.
    #[must_use]
    pub fn cell(&self, pos: Position) -> BoardCell {
        let occupant = self.cells.get(&pos);
        BoardCell {
            position: pos,
            bonus: bonus_at(pos),
            tile: occupant.map(|o| o.tile.clone()),
            locked: occupant.is_some_and(|o| o.locked),
        }
    }

    /// Every square in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = BoardCell> + '_ {
        Position::all().map(move |pos| self.cell(pos))
    }

    /// Occupied squares with their tiles, unordered.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.cells.iter().map(|(pos, o)| (*pos, &o.tile))
    }

    /// Merge placements into a new candidate board, leaving `self` untouched.
    ///
    /// Placed tiles are unlocked on the candidate. Fails if any target square
    /// is off the board or already holds a tile.
    pub fn with_placements<'a, I>(&self, placements: I) -> Result<Board, PlacementConflict>
    where
        I: IntoIterator<Item = (Position, &'a Tile)>,
    {
        let mut candidate = self.clone();
        for (pos, tile) in placements {
            if !pos.is_on_board() {
                return Err(PlacementConflict::OffBoard(pos));
            }
            if candidate.is_occupied(pos) {
                return Err(PlacementConflict::Occupied(pos));
            }
            candidate.cells.insert(
                pos,
                Occupant {
                    tile: tile.clone(),
                    locked: false,
                },
            );
        }
        Ok(candidate)
    }

    /// Lock the tiles on the given squares. Unoccupied squares are skipped.
    pub fn lock(&mut self, positions: &[Position]) {
        for pos in positions {
            if let Some(occupant) = self.cells.get_mut(pos) {
                occupant.locked = true;
            }
        }
    }
}

impl From<Board> for Vec<BoardCell> {
    fn from(board: Board) -> Self {
        board.cells().collect()
    }
}

impl TryFrom<Vec<BoardCell>> for Board {
    type Error = PlacementConflict;

    fn try_from(cells: Vec<BoardCell>) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for cell in cells {
            let Some(tile) = cell.tile else { continue };
            if !cell.position.is_on_board() {
                return Err(PlacementConflict::OffBoard(cell.position));
            }
            if board.is_occupied(cell.position) {
                return Err(PlacementConflict::Occupied(cell.position));
            }
            board.cells.insert(
                cell.position,
                Occupant {
                    tile,
                    locked: cell.locked,
                },
            );
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// Text grid: letters for tiles, `.` for empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let c = self.tile_at(Position::new(row, col)).map_or('.', Tile::face);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::CENTER;
    use crate::core::tile::TileId;

    fn tile(id: u16, letter: char) -> Tile {
        Tile::new(TileId(id), letter, 1)
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(!board.has_locked_tiles());
        assert_eq!(board.locked_count(), 0);
        assert_eq!(board.cells().count(), 225);
        assert_eq!(board.cell(CENTER).bonus, Bonus::Center);
    }

    #[test]
    fn test_with_placements_leaves_original_untouched() {
        let board = Board::new();
        let a = tile(1, 'A');
        let candidate = board.with_placements([(CENTER, &a)]).unwrap();

        assert!(!board.is_occupied(CENTER));
        assert!(candidate.is_occupied(CENTER));
        assert!(!candidate.is_locked(CENTER));
        assert!(!candidate.has_locked_tiles());
    }

    #[test]
    fn test_with_placements_rejects_occupied() {
        let a = tile(1, 'A');
        let b = tile(2, 'B');
        let mut board = Board::new().with_placements([(CENTER, &a)]).unwrap();
        board.lock(&[CENTER]);

        let err = board.with_placements([(CENTER, &b)]).unwrap_err();
        assert_eq!(err, PlacementConflict::Occupied(CENTER));
    }

    #[test]
    fn test_with_placements_rejects_off_board() {
        let a = tile(1, 'A');
        let off = Position::new(15, 2);
        let err = Board::new().with_placements([(off, &a)]).unwrap_err();
        assert_eq!(err, PlacementConflict::OffBoard(off));
    }

    #[test]
    fn test_lock() {
        let a = tile(1, 'A');
        let mut board = Board::new().with_placements([(CENTER, &a)]).unwrap();
        board.lock(&[CENTER, Position::new(0, 0)]);

        assert!(board.is_locked(CENTER));
        assert!(board.has_locked_tiles());
        assert_eq!(board.locked_count(), 1);
        assert!(!board.is_occupied(Position::new(0, 0)));
    }

    #[test]
    fn test_display() {
        let c = tile(1, 'C');
        let board = Board::new().with_placements([(Position::new(0, 1), &c)]).unwrap();
        let text = board.to_string();
        assert!(text.starts_with(".C............."));
        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn test_serialization_round_trip() {
        let a = tile(1, 'A');
        let b = tile(2, 'B');
        let mut board = Board::new()
            .with_placements([(CENTER, &a), (Position::new(7, 8), &b)])
            .unwrap();
        board.lock(&[CENTER]);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, back);
        assert!(back.is_locked(CENTER));
        assert!(!back.is_locked(Position::new(7, 8)));
    }
}
