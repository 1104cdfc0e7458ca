//! Move scoring.
//!
//! Bonus squares only count for tiles placed by the move being scored;
//! tiles committed earlier contribute their face value alone.

use rustc_hash::FxHashSet;

use super::words::FoundWord;
use crate::board::{bonus_at, Position};

/// Score of one word.
///
/// Sum of letter scores (letter bonuses applied to newly placed tiles) times
/// the product of word multipliers under newly placed tiles.
#[must_use]
pub fn score_word(word: &FoundWord, placed: &FxHashSet<Position>) -> i32 {
    let (sum, multiplier) = word
        .tiles
        .iter()
        .fold((0, 1), |(sum, multiplier), (pos, tile)| {
            if placed.contains(pos) {
                let bonus = bonus_at(*pos);
                (
                    sum + tile.score() * bonus.letter_multiplier(),
                    multiplier * bonus.word_multiplier(),
                )
            } else {
                (sum + tile.score(), multiplier)
            }
        });
    sum * multiplier
}

/// Total for a move: every word it formed, plus `bingo_bonus` when exactly
/// `bingo_tiles` tiles were placed.
#[must_use]
pub fn score_move(words: &[FoundWord], placed: &[Position], bingo_tiles: usize, bingo_bonus: i32) -> i32 {
    let placed_set: FxHashSet<Position> = placed.iter().copied().collect();
    let words_total: i32 = words.iter().map(|w| score_word(w, &placed_set)).sum();

    if placed.len() == bingo_tiles {
        words_total + bingo_bonus
    } else {
        words_total
    }
}
