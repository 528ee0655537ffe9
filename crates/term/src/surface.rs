//! Surface: the drawing primitives the game view is written against.
//!
//! Coordinates are zero-based terminal columns and rows. Nothing reaches the
//! screen until [`Surface::flush`].

use anyhow::Result;

use crate::types::Color;

/// A cursor-addressed character display
pub trait Surface {
    /// Erase the whole display
    fn clear(&mut self) -> Result<()>;
    /// Print `text` starting at column `x`, row `y` with the current style
    fn write_at(&mut self, x: u16, y: u16, text: &str) -> Result<()>;
    fn set_foreground(&mut self, color: Color) -> Result<()>;
    fn set_background(&mut self, color: Color) -> Result<()>;
    fn set_bold(&mut self) -> Result<()>;
    /// Back to default colors and attributes
    fn reset_style(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
    fn hide_cursor(&mut self) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// In-memory surface that keeps the resulting character grid
///
/// Used by tests and headless runs to inspect what a frame would look like.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u16,
    height: u16,
    chars: Vec<char>,
    colors: Vec<Option<Color>>,
    foreground: Option<Color>,
    clears: usize,
    flushes: usize,
    color_changes: usize,
    cursor_visible: bool,
}

impl RecordingSurface {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            chars: vec![' '; len],
            colors: vec![None; len],
            foreground: None,
            clears: 0,
            flushes: 0,
            color_changes: 0,
            cursor_visible: true,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// `len` characters starting at (`x`, `y`); off-screen cells read as spaces
    pub fn text(&self, x: u16, y: u16, len: u16) -> String {
        (x..x.saturating_add(len))
            .map(|cx| self.idx(cx, y).map_or(' ', |i| self.chars[i]))
            .collect()
    }

    /// Whole row `y` with trailing spaces removed
    pub fn line(&self, y: u16) -> String {
        self.text(0, y, self.width).trim_end().to_string()
    }

    /// Foreground color the character at (`x`, `y`) was written with
    pub fn color_at(&self, x: u16, y: u16) -> Option<Color> {
        self.idx(x, y).and_then(|i| self.colors[i])
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Number of foreground/background changes requested so far
    pub fn color_changes(&self) -> usize {
        self.color_changes
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(160, 30)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.chars.fill(' ');
        self.colors.fill(None);
        self.clears += 1;
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            if let Some(i) = self.idx(x.saturating_add(offset), y) {
                self.chars[i] = ch;
                self.colors[i] = self.foreground;
            }
        }
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.foreground = Some(color);
        self.color_changes += 1;
        Ok(())
    }

    fn set_background(&mut self, _color: Color) -> Result<()> {
        self.color_changes += 1;
        Ok(())
    }

    fn set_bold(&mut self) -> Result<()> {
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        self.foreground = None;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.cursor_visible = true;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor_visible = false;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
