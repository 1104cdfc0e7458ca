//! Scoring and word discovery through the public board API.

use rust_wordgrid::board::{bonus_at, Board, Bonus, Position};
use rust_wordgrid::core::{LetterDistribution, Tile, TileId};
use rust_wordgrid::rules::{check_connected, check_placement, find_words, score_move};
use rust_wordgrid::Rejection;

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn tiles(word: &str) -> Vec<Tile> {
    let points = LetterDistribution::standard();
    word.chars()
        .enumerate()
        .map(|(i, c)| Tile::new(TileId(i as u16), c, points.points_for(c)))
        .collect()
}

/// Lay `word` across from `start` on `board` and score it as one move.
fn play(board: &Board, word: &str, start: Position) -> (Board, i32) {
    let squares: Vec<Position> = (0..word.len())
        .map(|i| p(start.row, start.col + i as u8))
        .collect();
    let tiles = tiles(word);
    let candidate = board
        .with_placements(squares.iter().copied().zip(tiles.iter()))
        .unwrap();
    let words = find_words(&candidate, &squares);
    let score = score_move(&words, &squares, 7, 50);

    let mut committed = candidate;
    committed.lock(&squares);
    (committed, score)
}

#[test]
fn test_cat_values() {
    let board = Board::new();

    assert_eq!(bonus_at(p(4, 5)), Bonus::None);
    assert_eq!(play(&board, "CAT", p(4, 5)).1, 5);

    assert_eq!(bonus_at(p(0, 3)), Bonus::DoubleLetter);
    assert_eq!(play(&board, "CAT", p(0, 3)).1, 8);

    assert_eq!(bonus_at(p(14, 7)), Bonus::TripleWord);
    assert_eq!(play(&board, "CAT", p(14, 5)).1, 15);
    assert_eq!(play(&board, "CAT", p(14, 6)).1, 15);
    assert_eq!(play(&board, "CAT", p(14, 7)).1, 15);
}

#[test]
fn test_triple_word_corners_compound() {
    // Row 0: (0, 0) TW, (0, 3) DL, (0, 7) TW.
    let (_, score) = play(&Board::new(), "ABSENTS", p(0, 1));
    // S doubled on (0, 3), the last S on the triple word, plus the bonus.
    assert_eq!(score, (9 + 1) * 3 + 50);

    let (_, score) = play(&Board::new(), "AAAAAAAA", p(0, 0));
    // 8 letters + 1 for the double letter, x3 x3, no bonus for eight tiles.
    assert_eq!(score, 9 * 9);
}

#[test]
fn test_seven_tile_bonus() {
    let board = Board::new();
    // Row 6 cols 3..: plain except (6, 6) and (6, 8) double letters.
    let (_, six) = play(&board, "EEEEEE", p(6, 3));
    let (_, seven) = play(&board, "EEEEEEE", p(6, 3));
    let (_, eight) = play(&board, "EEEEEEEE", p(6, 3));

    assert_eq!(six, 8);
    assert_eq!(seven, 9 + 50);
    assert_eq!(eight, 10);
}

#[test]
fn test_bonus_used_once() {
    let (board, first) = play(&Board::new(), "CAT", p(7, 7));
    assert_eq!(first, 10);

    // Extending CAT to CATS: the centre does not double again.
    let (_, second) = play(&board, "S", p(7, 10));
    assert_eq!(second, 6);
}

#[test]
fn test_validators_use_pre_move_board() {
    let (board, _) = play(&Board::new(), "CAT", p(7, 7));

    assert_eq!(check_placement(&board, &[p(7, 6), p(7, 10)]), Ok(()));
    assert_eq!(
        check_placement(&board, &[p(8, 6), p(8, 10)]),
        Err(Rejection::Gap(p(8, 7)))
    );
    assert_eq!(check_connected(&board, &[p(8, 8)]), Ok(()));
    assert_eq!(check_connected(&board, &[p(9, 8)]), Err(Rejection::Disconnected));
}
