//! Terminal surface abstraction.
//!
//! The renderer and player speak to a [`TerminalSurface`] instead of
//! stdout so tests can capture exactly which cells were written. This
//! layer exists purely for testability.

use crate::error::SurfaceError;
use crossterm::{cursor, execute, queue, style::Print, terminal};
use std::io::{self, Stdout, Write};

/// Cursor-addressed character output on a display device.
///
/// Rows and columns are 0-based; implementations translate to whatever
/// the device expects. `print_char` is queued; nothing is guaranteed to
/// reach the device until `flush`.
pub trait TerminalSurface {
    /// Prepare the surface for playback (cleared screen, hidden cursor).
    fn enter(&mut self) -> Result<(), SurfaceError>;
    /// Restore the surface. Best-effort; called on every exit path.
    fn leave(&mut self) -> Result<(), SurfaceError>;
    /// Move the cursor to (row, col).
    fn move_to(&mut self, row: u16, col: u16) -> Result<(), SurfaceError>;
    /// Write one character at the cursor; the cursor advances one column.
    fn print_char(&mut self, ch: char) -> Result<(), SurfaceError>;
    /// Push queued output to the device.
    fn flush(&mut self) -> Result<(), SurfaceError>;
}

/// Real crossterm-backed surface over stdout.
///
/// `enter` switches to the alternate screen so the user's shell content
/// reappears untouched on exit. No raw mode: keyboard input is not read,
/// and Ctrl+C must keep delivering SIGINT to the process.
pub struct CrosstermSurface {
    stdout: Stdout,
}

impl CrosstermSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface for CrosstermSurface {
    fn enter(&mut self) -> Result<(), SurfaceError> {
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), SurfaceError> {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        Ok(())
    }

    fn move_to(&mut self, row: u16, col: u16) -> Result<(), SurfaceError> {
        // crossterm MoveTo takes (column, row).
        queue!(self.stdout, cursor::MoveTo(col, row))?;
        Ok(())
    }

    fn print_char(&mut self, ch: char) -> Result<(), SurfaceError> {
        queue!(self.stdout, Print(ch))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Capturing surface for tests: records every write without a TTY.
///
/// Keeps its own cursor so recorded positions reflect what a real
/// terminal would display, including the implicit advance after each
/// character.
#[derive(Debug, Default)]
pub struct CaptureSurface {
    writes: Vec<(u16, u16, char)>,
    cursor: (u16, u16),
    entered: bool,
    left: bool,
    flushes: usize,
}

impl CaptureSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(row, col, char)` writes, in emission order.
    #[must_use]
    pub fn writes(&self) -> &[(u16, u16, char)] {
        &self.writes
    }

    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    #[must_use]
    pub fn was_left(&self) -> bool {
        self.left
    }

    #[must_use]
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl TerminalSurface for CaptureSurface {
    fn enter(&mut self) -> Result<(), SurfaceError> {
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), SurfaceError> {
        self.left = true;
        Ok(())
    }

    fn move_to(&mut self, row: u16, col: u16) -> Result<(), SurfaceError> {
        self.cursor = (row, col);
        Ok(())
    }

    fn print_char(&mut self, ch: char) -> Result<(), SurfaceError> {
        let (row, col) = self.cursor;
        self.writes.push((row, col, ch));
        self.cursor = (row, col.saturating_add(1));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        self.flushes += 1;
        Ok(())
    }
}
