//! Terminal writer: a queue of primitive commands flushed in one batch.
//!
//! The terminal surface records every bar as commands and flushes once per
//! report, so a frame is either fully visible or not at all.
//!
//! Invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * Colors set by `SetBackground` persist until `ResetColor`.
//! * Empty prints are dropped.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    SetBackground(Color),
    ResetColor,
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn set_background(&mut self, color: Color) {
        self.cmds.push(Command::SetBackground(color));
    }
    pub fn reset_color(&mut self) {
        self.cmds.push(Command::ResetColor);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Emit every queued command to `out`, then flush it. The queue is left
    /// empty so the writer can be reused for the next frame.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<usize> {
        let emitted = self.cmds.len();
        for c in self.cmds.drain(..) {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::SetBackground(color) => queue!(out, SetBackgroundColor(color))?,
                Command::ResetColor => queue!(out, ResetColor)?,
                Command::Print(s) => queue!(out, Print(s))?,
            }
        }
        out.flush()?;
        Ok(emitted)
    }
}
