//! # Console
//!
//! The terminal seen by a menu session: size, cursor position, key events and
//! an output stream. The [`Console`] trait lets the session run against a
//! scripted console in tests; [`CrosstermConsole`] is the real terminal.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{self, Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

/// Terminal operations a menu session needs
pub trait Console {
    /// Terminal size as `(columns, rows)`
    fn size(&self) -> Result<(u16, u16)>;

    /// Current cursor position as `(column, row)`, zero-based
    fn cursor_position(&mut self) -> Result<(u16, u16)>;

    /// Block until the next terminal event arrives
    fn read_event(&mut self) -> Result<Event>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Stream that frames are written to
    fn writer(&mut self) -> &mut dyn Write;
}

/// The process's real terminal, driven through crossterm
///
/// Raw mode is enabled for as long as the console exists so key presses are
/// neither echoed nor line-buffered.
pub struct CrosstermConsole {
    stdout: Stdout,
}

impl CrosstermConsole {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode for terminal")?;
        Ok(Self {
            stdout: io::stdout(),
        })
    }
}

impl Drop for CrosstermConsole {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl Console for CrosstermConsole {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("Failed to read terminal size")
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        self.stdout.flush().context("Failed to flush terminal output")?;
        cursor::position().context("Failed to read cursor position")
    }

    fn read_event(&mut self) -> Result<Event> {
        event::read().context("Failed to read keyboard event")
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            execute!(self.stdout, Show).context("Failed to show cursor")
        } else {
            execute!(self.stdout, Hide).context("Failed to hide cursor")
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

/// Hides the cursor for its lifetime and shows it again when dropped,
/// whichever way the session ends
pub struct HiddenCursor<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> HiddenCursor<'a, C> {
    pub fn new(console: &'a mut C) -> Result<Self> {
        console.set_cursor_visible(false)?;
        Ok(Self { console })
    }
}

impl<C: Console + ?Sized> Deref for HiddenCursor<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console + ?Sized> DerefMut for HiddenCursor<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console + ?Sized> Drop for HiddenCursor<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.set_cursor_visible(true);
    }
}
