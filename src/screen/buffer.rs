//! Screen implementation
//!
//! `back` receives writes, `front` mirrors what was last rendered.

use std::io::Write;

use crate::error::Result;

use super::terminal::TerminalSize;
use super::{BLANK, CLEAR_SEQUENCE};

/// Character grid with a back buffer for drawing and a front buffer for
/// the last rendered frame
#[derive(Debug, Clone)]
pub struct Screen {
    width: usize,
    height: usize,

    /// Grid being drawn, row-major
    back: Vec<Vec<char>>,

    /// Grid last sent to the console
    front: Vec<Vec<char>>,
}

impl Screen {
    /// Create a blank `width x height` screen
    pub fn new(width: usize, height: usize) -> Self {
        let grid = blank_grid(width, height);
        Self {
            width,
            height,
            back: grid.clone(),
            front: grid,
        }
    }

    /// Create a screen sized to the given terminal
    pub fn for_terminal(terminal: &impl TerminalSize) -> Result<Self> {
        let (width, height) = terminal.dimensions()?;
        Ok(Self::new(width, height))
    }

    /// Put `ch` at column `x`, row `y`; out-of-bounds coordinates are ignored
    pub fn set_character_at(&mut self, x: usize, y: usize, ch: char) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.back[y][x] = ch;
    }

    /// Put the chars of `text` left to right starting at `(x, y)`, clipped
    /// at the right edge
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.set_character_at(x.saturating_add(offset), y, ch);
        }
    }

    /// Char at `(x, y)` in the back buffer
    pub fn character_at(&self, x: usize, y: usize) -> Option<char> {
        self.back.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Blank the back buffer
    pub fn clear_buffer(&mut self) {
        for row in &mut self.back {
            row.fill(BLANK);
        }
    }

    /// Clear the console and write every row of the back buffer
    pub fn render(&mut self, out: &mut impl Write) -> Result<()> {
        let mut frame = String::with_capacity(CLEAR_SEQUENCE.len() + self.width * self.height);
        frame.push_str(CLEAR_SEQUENCE);
        for row in &self.back {
            frame.extend(row.iter());
        }

        out.write_all(frame.as_bytes())?;
        out.flush()?;

        self.front.clone_from(&self.back);
        Ok(())
    }

    /// True when the back buffer differs from the last rendered frame
    pub fn is_dirty(&self) -> bool {
        self.back != self.front
    }

    /// Re-query the terminal size and resize both buffers, keeping the
    /// content that still fits
    pub fn refresh_dimensions(&mut self, terminal: &impl TerminalSize) -> Result<()> {
        let (width, height) = terminal.dimensions()?;
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }

        tracing::debug!(
            "Screen resized from {}x{} to {}x{}",
            self.width,
            self.height,
            width,
            height
        );

        self.back = resize_grid(&self.back, width, height);
        self.front = resize_grid(&self.front, width, height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

fn blank_grid(width: usize, height: usize) -> Vec<Vec<char>> {
    vec![vec![BLANK; width]; height]
}

fn resize_grid(old: &[Vec<char>], width: usize, height: usize) -> Vec<Vec<char>> {
    let mut grid = blank_grid(width, height);
    for (new_row, old_row) in grid.iter_mut().zip(old) {
        let keep = width.min(old_row.len());
        new_row[..keep].copy_from_slice(&old_row[..keep]);
    }
    grid
}
