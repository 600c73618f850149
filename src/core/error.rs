//! Engine error type.
//!
//! Only genuinely recoverable conditions live here. Addressing a cell
//! outside the grid is a precondition violation and is caught by debug
//! assertions instead.

/// Errors produced by the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("board is full: no empty cell to spawn into")]
    BoardFull,
    #[error("invalid tile value {0}: must be a power of two >= 2")]
    InvalidTile(u32),
    #[error("grid shape mismatch: expected {rows}x{cols}")]
    ShapeMismatch { rows: usize, cols: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("render failed: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
