//! Tiles and the board that owns them.
//!
//! The board exclusively owns its tiles. It is mutated by the movement
//! engine (which replaces it wholesale each turn) and by the spawn step.

mod grid;
mod tile;

pub use grid::Board;
pub use tile::{cell_at, cell_origin, is_tile_value, Tile, MAX_TILE_VALUE};
