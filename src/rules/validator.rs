//! Placement-shape and connectivity checks.
//!
//! Both checks look at the board as it was *before* the move: "occupied"
//! means a tile committed by an earlier move.

use rustc_hash::FxHashSet;

use crate::board::{Board, Position, CENTER};
use crate::core::error::Rejection;

/// Placed tiles share one row or one column with no empty square between
/// the outermost two.
///
/// A single tile (or none) is trivially in line.
pub fn check_placement(board: &Board, placed: &[Position]) -> Result<(), Rejection> {
    let Some(first) = placed.first() else {
        return Ok(());
    };
    if placed.len() == 1 {
        return Ok(());
    }

    let same_row = placed.iter().all(|p| p.row == first.row);
    let same_col = placed.iter().all(|p| p.col == first.col);

    let line: Vec<Position> = if same_row {
        let (lo, hi) = span(placed.iter().map(|p| p.col));
        (lo..=hi).map(|col| Position::new(first.row, col)).collect()
    } else if same_col {
        let (lo, hi) = span(placed.iter().map(|p| p.row));
        (lo..=hi).map(|row| Position::new(row, first.col)).collect()
    } else {
        return Err(Rejection::NotInLine);
    };

    match line
        .into_iter()
        .find(|pos| !board.is_occupied(*pos) && !placed.contains(pos))
    {
        Some(gap) => Err(Rejection::Gap(gap)),
        None => Ok(()),
    }
}

/// Boolean form of `check_placement`.
#[must_use]
pub fn is_placement_valid(board: &Board, placed: &[Position]) -> bool {
    check_placement(board, placed).is_ok()
}

/// On an empty board the move must cover the centre; otherwise at least one
/// placed square must touch a tile already on the board.
pub fn check_connected(board: &Board, placed: &[Position]) -> Result<(), Rejection> {
    if !board.has_locked_tiles() {
        return if placed.contains(&CENTER) {
            Ok(())
        } else {
            Err(Rejection::MissesCenter)
        };
    }

    let placed_set: FxHashSet<Position> = placed.iter().copied().collect();
    let touches = placed.iter().any(|pos| {
        pos.neighbors()
            .any(|n| board.is_locked(n) && !placed_set.contains(&n))
    });

    if touches {
        Ok(())
    } else {
        Err(Rejection::Disconnected)
    }
}

/// Boolean form of `check_connected`.
#[must_use]
pub fn is_move_connected(board: &Board, placed: &[Position]) -> bool {
    check_connected(board, placed).is_ok()
}

fn span(coords: impl Iterator<Item = u8>) -> (u8, u8) {
    coords.fold((u8::MAX, u8::MIN), |(lo, hi), c| (lo.min(c), hi.max(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::{Tile, TileId};

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    /// Board with locked tiles on the given squares.
    fn board_with(squares: &[Position]) -> Board {
        let tiles: Vec<Tile> = (0..squares.len())
            .map(|i| Tile::new(TileId(i as u16), 'A', 1))
            .collect();
        let mut board = Board::new()
            .with_placements(squares.iter().copied().zip(tiles.iter()))
            .unwrap();
        board.lock(squares);
        board
    }

    #[test]
    fn test_single_tile_is_in_line() {
        assert!(is_placement_valid(&Board::new(), &[]));
        assert!(is_placement_valid(&Board::new(), &[p(3, 4)]));
    }

    #[test]
    fn test_row_without_gap() {
        assert!(is_placement_valid(&Board::new(), &[p(7, 9), p(7, 7), p(7, 8)]));
    }

    #[test]
    fn test_column_without_gap() {
        assert!(is_placement_valid(&Board::new(), &[p(5, 2), p(6, 2), p(7, 2)]));
    }

    #[test]
    fn test_not_in_line() {
        let err = check_placement(&Board::new(), &[p(7, 7), p(8, 8)]).unwrap_err();
        assert_eq!(err, Rejection::NotInLine);
    }

    #[test]
    fn test_gap_is_rejected() {
        let err = check_placement(&Board::new(), &[p(7, 6), p(7, 8)]).unwrap_err();
        assert_eq!(err, Rejection::Gap(p(7, 7)));
    }

    #[test]
    fn test_gap_filled_by_existing_tile() {
        let board = board_with(&[p(7, 7)]);
        assert!(is_placement_valid(&board, &[p(7, 6), p(7, 8)]));
    }

    #[test]
    fn test_first_move_must_cover_center() {
        let board = Board::new();
        assert!(is_move_connected(&board, &[p(7, 6), p(7, 7)]));
        assert_eq!(
            check_connected(&board, &[p(7, 5), p(7, 6)]).unwrap_err(),
            Rejection::MissesCenter
        );
    }

    #[test]
    fn test_later_move_must_touch_board() {
        let board = board_with(&[p(7, 7), p(7, 8)]);

        assert!(is_move_connected(&board, &[p(8, 8), p(9, 8)]));
        assert!(is_move_connected(&board, &[p(7, 9)]));
        assert_eq!(
            check_connected(&board, &[p(10, 10), p(10, 11)]).unwrap_err(),
            Rejection::Disconnected
        );
    }

    #[test]
    fn test_diagonal_contact_does_not_connect() {
        let board = board_with(&[p(7, 7)]);
        assert!(!is_move_connected(&board, &[p(8, 8)]));
    }

    #[test]
    fn test_unlocked_candidate_tiles_do_not_count() {
        // A board where the only tile is an unlocked candidate behaves as empty.
        let t = Tile::new(TileId(0), 'A', 1);
        let board = Board::new().with_placements([(p(7, 7), &t)]).unwrap();
        assert_eq!(
            check_connected(&board, &[p(7, 8)]).unwrap_err(),
            Rejection::MissesCenter
        );
    }
}
