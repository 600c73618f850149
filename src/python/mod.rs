//! Python bindings for the tile-merge engine.
//!
//! # Quick Start
//!
//! ```python
//! import tile_merge
//!
//! game = tile_merge.Game(seed=42)
//! moved, lost = game.step(0)  # 0=Left, 1=Right, 2=Up, 3=Down
//! grid = game.board_numpy()
//! if game.lost:
//!     game.restart()
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// tile_merge: a sliding-tile merge puzzle engine.
#[pymodule]
fn tile_merge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
