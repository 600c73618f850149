//! Collaborator seams and the game loop.
//!
//! The session never polls devices or draws pixels itself. Front ends
//! implement [`InputSource`] and [`Renderer`] and hand them to [`run_loop`].

use std::collections::VecDeque;

use log::debug;

use super::game::{Command, GameSession, Snapshot};
use crate::core::EngineResult;

/// Supplies commands, one per call.
pub trait InputSource {
    /// Next command, or `None` once input is exhausted.
    fn next_command(&mut self) -> Option<Command>;
}

/// Draws a snapshot.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> EngineResult<()>;
}

/// A fixed list of commands, for replays and tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }
}

/// Keeps every snapshot it is asked to render.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Snapshot>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

/// Drive `session` until the input quits or runs dry.
///
/// Renders once up front and once after every command. Returns the final
/// snapshot.
pub fn run_loop<I, R>(session: &mut GameSession, input: &mut I, renderer: &mut R) -> EngineResult<Snapshot>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    renderer.render(&session.snapshot())?;

    while let Some(command) = input.next_command() {
        debug!("command {:?}", command);
        if !session.handle_command(command)? {
            break;
        }
        renderer.render(&session.snapshot())?;
    }

    Ok(session.snapshot())
}
