//! Game rules: validation, word discovery, scoring and transitions.
//!
//! The pure checks (`validator`, `words`, `score`) work on boards and
//! positions only. `Engine` strings them together over a `GameState` and
//! consults the injected `Dictionary`.

pub mod dictionary;
mod endgame;
pub mod engine;
pub mod score;
pub mod validator;
pub mod words;

pub use dictionary::{Dictionary, WordList};
pub use engine::Engine;
pub use score::{score_move, score_word};
pub use validator::{check_connected, check_placement, is_move_connected, is_placement_valid};
pub use words::{find_words, FoundWord, Orientation};
