//! Game session and the collaborators that drive it.
//!
//! - `game`: [`GameSession`], [`Command`] and the renderer-facing [`Snapshot`]
//! - `driver`: input/renderer traits and the [`run_loop`] game loop
//! - `text`: line-based input and a plain-text renderer for terminals

mod driver;
mod game;
mod text;

pub use driver::{run_loop, InputSource, RecordingRenderer, Renderer, ScriptedInput};
pub use game::{Command, GameSession, Snapshot};
pub use text::{LineInput, TextRenderer};
