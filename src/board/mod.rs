//! Board model: grid geometry, the fixed bonus layout and candidate boards.
//!
//! ## Key Types
//!
//! - `Position`: A (row, col) square
//! - `Bonus`: Letter/word multiplier printed on a square
//! - `Board`: Occupied squares, persistent for cheap candidate construction
//! - `BoardCell`: One square as clients see it

pub mod grid;
pub mod layout;

pub use grid::{Board, BoardCell, Occupant, PlacementConflict};
pub use layout::{bonus_at, Bonus, Position, BOARD_SIZE, CENTER};
