//! Crossterm-backed surface and terminal lifecycle.
//!
//! Drawing commands are queued into an in-memory buffer and written to the
//! output in one go on flush.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::surface::Surface;
use crate::types::Color;

/// Column and row of the final message, just below the playfield borders.
pub const GAME_OVER_X: u16 = 1;
pub const GAME_OVER_Y: u16 = crate::types::PLAYFIELD_H as u16 + 3;

/// Map a cell color to the terminal's basic palette entry
pub fn term_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Fuchsia => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
    }
}

/// [`Surface`] that emits crossterm commands to a writer (stdout by default)
pub struct CrosstermSurface<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl CrosstermSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Bytes queued since the last flush
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for CrosstermSurface<W> {
    fn clear(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.buf.queue(SetForegroundColor(term_color(color)))?;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> Result<()> {
        self.buf.queue(SetBackgroundColor(term_color(color)))?;
        Ok(())
    }

    fn set_bold(&mut self) -> Result<()> {
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.buf.queue(cursor::Show)?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.buf.queue(cursor::Hide)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

/// Raw-mode session on the controlling terminal
///
/// [`TerminalGuard::finish`] prints the closing message and restores the
/// terminal. If the guard is dropped without `finish` (an error path), the
/// terminal is still restored, just without the message.
pub struct TerminalGuard {
    surface: CrosstermSurface,
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode, hide the cursor and clear the screen
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut surface = CrosstermSurface::stdout();
        surface.hide_cursor()?;
        surface.clear()?;
        surface.flush()?;
        Ok(Self {
            surface,
            active: true,
        })
    }

    /// Print `Game over!` below the boards and restore the terminal
    pub fn finish(mut self) -> Result<()> {
        self.surface.reset_style()?;
        self.surface.write_at(GAME_OVER_X, GAME_OVER_Y, "Game over!")?;
        self.surface.write_at(0, GAME_OVER_Y + 1, "")?;
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.surface.reset_style()?;
        self.surface.show_cursor()?;
        self.surface.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
