//! Tile bag: the fixed tile set and randomized draw/return.
//!
//! Tile identity is preserved across bag, rack and board; the bag only
//! ever holds tiles that are on no rack and no square.

pub mod tile_bag;

pub use tile_bag::TileBag;
