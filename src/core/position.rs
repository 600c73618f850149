//! Grid addressing.
//!
//! A cell is addressed either by its `(row, col)` pair or by a single linear
//! index `row * cols + col`. Boards key their tiles by the linear index.
//!
//! ```
//! use tile_merge::core::{GridShape, Position};
//!
//! let shape = GridShape::new(4, 4);
//! let pos = Position::new(2, 1);
//! assert_eq!(shape.index(pos), 9);
//! assert_eq!(shape.position(9), pos);
//! ```

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Linear index of `(row, col)` on a grid with `cols` columns.
///
/// Pure arithmetic with no bounds checking. Callers must stay inside the
/// configured grid.
#[inline]
#[must_use]
pub const fn index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

/// A cell on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear index on a grid with `cols` columns.
    #[must_use]
    pub const fn index(self, cols: usize) -> usize {
        index(self.row, self.col, cols)
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Check whether a position lies on the grid.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Linear index of an on-grid position.
    #[must_use]
    pub fn index(self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "position {pos} outside {}x{} grid", self.rows, self.cols);
        pos.index(self.cols)
    }

    /// Position of an on-grid linear index.
    #[must_use]
    pub fn position(self, index: usize) -> Position {
        debug_assert!(index < self.cell_count(), "index {index} outside {}x{} grid", self.rows, self.cols);
        Position::from_index(index, self.cols)
    }

    /// All positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.cell_count()).map(move |i| Position::from_index(i, self.cols))
    }

    /// The neighbouring cell one step in `direction`, or `None` at the boundary.
    #[must_use]
    pub fn neighbour(self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// Number of cells a tile travels across along `direction`'s axis.
    #[must_use]
    pub const fn lane_length(self, direction: Direction) -> usize {
        match direction.axis() {
            super::Axis::Col => self.cols,
            super::Axis::Row => self.rows,
        }
    }

    /// Number of independent lanes for `direction`.
    #[must_use]
    pub const fn lane_count(self, direction: Direction) -> usize {
        match direction.axis() {
            super::Axis::Col => self.rows,
            super::Axis::Row => self.cols,
        }
    }
}
