//! A single numbered tile.
//!
//! A tile carries both its discrete cell (`row`, `col`) and a continuous
//! pixel position. While a slide is being animated the pixel position moves
//! freely; [`Tile::settle`] derives the cell back from it.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameConfig, Position};

/// Largest tile value. Two tiles of this value block instead of merging.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// Pixel positions within this fraction of a cell from a cell corner count
/// as lying on it.
const SNAP_TOLERANCE: f32 = 1e-3;

/// Check that `value` is a legal tile value: a power of two, at least 2.
#[inline]
#[must_use]
pub const fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// A numbered piece on the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    value: u32,
    row: usize,
    col: usize,
    pixel_x: f32,
    pixel_y: f32,
}

impl Tile {
    /// Create a settled tile at `pos`.
    #[must_use]
    pub fn new(value: u32, pos: Position, config: &GameConfig) -> Self {
        debug_assert!(is_tile_value(value), "tile value {value} is not a power of two >= 2");
        let mut tile = Self {
            value,
            row: pos.row,
            col: pos.col,
            pixel_x: 0.0,
            pixel_y: 0.0,
        };
        tile.place_at(pos, config);
        tile
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Current pixel position `(x, y)`.
    #[must_use]
    pub fn pixel(&self) -> (f32, f32) {
        (self.pixel_x, self.pixel_y)
    }

    /// Whether `other` can be absorbed into this tile.
    #[must_use]
    pub fn merges_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value < MAX_TILE_VALUE
    }

    /// Absorb an equal tile.
    pub(crate) fn double(&mut self) {
        debug_assert!(self.value < MAX_TILE_VALUE, "tile value {} can not double", self.value);
        self.value = self.value.saturating_mul(2);
    }

    /// Put the tile at rest on `pos`, cell and pixels both.
    pub fn rest_at(&mut self, pos: Position, config: &GameConfig) {
        self.row = pos.row;
        self.col = pos.col;
        self.place_at(pos, config);
    }

    /// Snap the pixel position to the top-left corner of `pos`.
    pub fn place_at(&mut self, pos: Position, config: &GameConfig) {
        let (x, y) = cell_origin(pos, config);
        self.pixel_x = x;
        self.pixel_y = y;
    }

    /// Shift the pixel position. The cell is untouched until [`Tile::settle`].
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pixel_x += dx;
        self.pixel_y += dy;
    }

    /// Recompute the cell from the pixel position.
    ///
    /// Rounds toward the direction of travel: up for LEFT/UP, down for
    /// RIGHT/DOWN. A tile part-way between two cells keeps reporting the
    /// cell it is leaving until it fully reaches the next one.
    pub fn settle(&mut self, direction: Direction, config: &GameConfig) {
        let pos = cell_at(self.pixel_x, self.pixel_y, direction, config);
        self.row = pos.row;
        self.col = pos.col;
    }
}

/// Pixel coordinates of a cell's top-left corner.
#[must_use]
pub fn cell_origin(pos: Position, config: &GameConfig) -> (f32, f32) {
    (
        pos.col as f32 * config.tile_width,
        pos.row as f32 * config.tile_height,
    )
}

/// Cell containing a pixel position, rounded toward the direction of travel.
///
/// A position that is a cell corner up to float error resolves to that cell
/// whatever the direction. The result is clamped to the grid.
#[must_use]
pub fn cell_at(pixel_x: f32, pixel_y: f32, direction: Direction, config: &GameConfig) -> Position {
    let round = |v: f32, cells: usize| {
        let v = v.max(0.0);
        let nearest = v.round();
        let cell = if (v - nearest).abs() <= SNAP_TOLERANCE {
            nearest
        } else if direction.rounds_up() {
            v.ceil()
        } else {
            v.floor()
        };
        (cell as usize).min(cells.saturating_sub(1))
    };
    let col = round(pixel_x / config.tile_width, config.cols);
    let row = round(pixel_y / config.tile_height, config.rows);
    Position::new(row, col)
}
