//! Plain-text collaborators for terminal play.

use std::io::{BufRead, Write};

use log::warn;

use super::driver::{InputSource, Renderer};
use super::game::{Command, Snapshot};
use crate::core::{EngineError, EngineResult};

/// Reads one key name per line. Unknown lines are skipped.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_command(&mut self) -> Option<Command> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match Command::from_key(&line) {
                        Some(command) => return Some(command),
                        None => warn!("unknown key {:?}", line.trim()),
                    }
                }
                Err(e) => {
                    warn!("input closed: {}", e);
                    return None;
                }
            }
        }
    }
}

/// Prints the grid, and the game-over banner once lost.
pub struct TextRenderer<W> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_snapshot(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        writeln!(self.writer, "turn {}", snapshot.turns)?;
        write!(self.writer, "{}", snapshot.board)?;
        if snapshot.lost {
            writeln!(self.writer, "Game Over!!!")?;
            writeln!(self.writer, "Press R to restart")?;
            writeln!(self.writer, "Press Q to quit")?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        self.write_snapshot(snapshot)
            .map_err(|e| EngineError::Render(e.to_string()))
    }
}
