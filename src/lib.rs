//! # tile-merge
//!
//! A sliding-tile merge puzzle (2048-style) engine.
//!
//! ## Design Principles
//!
//! 1. **Headless core**: the engine resolves a move instantly and
//!    deterministically. Animation, input and drawing are collaborators
//!    that sit outside it.
//!
//! 2. **Boards are values**: a turn takes a board by reference and returns a
//!    new one. `im` persistent maps make that, and snapshots, O(1) to clone.
//!
//! 3. **Explicit configuration**: grid size, spawn odds and pixel metrics
//!    travel in a `GameConfig`; nothing reads global state.
//!
//! ## Modules
//!
//! - `core`: grid addressing, directions, configuration, RNG, errors
//! - `board`: tiles and the board that owns them
//! - `engine`: slide/merge resolution, loss detection, turns
//! - `animation`: frame-paced pixel interpolation of a turn's slides
//! - `session`: game session, input/renderer seams, game loop
//!
//! ## Example
//!
//! ```
//! use tile_merge::{Direction, GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(7)).unwrap();
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     session.handle_direction(direction);
//! }
//! assert!(session.board().len() >= 2);
//! ```

pub mod animation;
pub mod board;
pub mod core;
pub mod engine;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Axis, Direction, EngineError, EngineResult, GameConfig, GameRng, GridShape, Position,
};

pub use crate::board::{Board, Tile};

pub use crate::engine::{
    advance, apply_move, can_move, has_moves, legal_directions, MoveOutcome, Slide, TurnOutcome,
};

pub use crate::animation::{AnimatedTile, SlideAnimation};

pub use crate::session::{
    run_loop, Command, GameSession, InputSource, LineInput, RecordingRenderer, Renderer,
    ScriptedInput, Snapshot, TextRenderer,
};
