//! Session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Direction, EngineError, GameConfig};
use crate::session::GameSession;

fn to_py_err(e: EngineError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: GameSession,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - rows, cols: grid size
    /// - four_probability: chance that a spawned tile is a 4
    #[new]
    #[pyo3(signature = (seed = 42, rows = 4, cols = 4, four_probability = 0.5))]
    fn new(seed: u64, rows: usize, cols: usize, four_probability: f64) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_grid(rows, cols)
            .with_four_probability(four_probability);
        let session = GameSession::new(config).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Play one turn (0=Left, 1=Right, 2=Up, 3=Down).
    ///
    /// Returns `(moved, lost)`. Moves after a loss are ignored.
    fn step(&mut self, action: u8) -> PyResult<(bool, bool)> {
        let direction = Direction::from_index(action).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid action: {}. Must be 0-3 (Left, Right, Up, Down).",
                action
            ))
        })?;
        let moved = self
            .session
            .handle_direction(direction)
            .is_some_and(|outcome| outcome.moved);
        Ok((moved, self.session.is_lost()))
    }

    /// Start over with a fresh board.
    fn restart(&mut self) -> PyResult<()> {
        self.session.restart().map_err(to_py_err)
    }

    /// Row-major grid of tile values, 0 for empty cells.
    fn board(&self) -> Vec<Vec<u32>> {
        self.session.board().to_grid()
    }

    /// Grid as a 2-D numpy array of shape (rows, cols).
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let shape = self.session.board().shape();
        let flat: Vec<u32> = self.session.board().to_grid().into_iter().flatten().collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([shape.rows, shape.cols])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    /// Actions that would change the board.
    fn legal_moves(&self) -> Vec<u8> {
        self.session
            .legal_directions()
            .into_iter()
            .map(|d| d as u8)
            .collect()
    }

    #[getter]
    fn lost(&self) -> bool {
        self.session.is_lost()
    }

    #[getter]
    fn turns(&self) -> u32 {
        self.session.turns()
    }

    #[getter]
    fn max_tile(&self) -> u32 {
        self.session.board().max_value()
    }

    fn __repr__(&self) -> String {
        let status = if self.session.is_lost() { "lost" } else { "ongoing" };
        format!(
            "Game(turns={}, max_tile={}, status={})",
            self.session.turns(),
            self.session.board().max_value(),
            status
        )
    }
}
