//! Core engine types: grid addressing, directions, configuration, RNG, errors.
//!
//! These are the leaf building blocks shared by the board, the movement
//! engine and the session. None of them hold game state of their own.

pub mod config;
pub mod direction;
pub mod error;
pub mod position;
pub mod rng;

pub use config::GameConfig;
pub use direction::{Axis, Direction};
pub use error::{EngineError, EngineResult};
pub use position::{index, GridShape, Position};
pub use rng::GameRng;
