//! Playfield module - one player's grid of locked cells
//!
//! The playfield is 20 rows of bit-packed cells. Each row is a `u32` holding
//! 10 columns of 3 bits (column `x` at bits `3x..3x+3`); `0` is empty and
//! `1..=7` is the color of a locked cell.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{CELL_BITS, CELL_MASK, GARBAGE_COLOR, PLAYFIELD_H, PLAYFIELD_W};

/// Number of rows in a playfield
const ROWS: usize = PLAYFIELD_H as usize;

/// One packed playfield row
pub type Row = u32;

/// An empty row
pub const EMPTY_ROW: Row = 0;

/// Color code stored in column `x` of a packed row
#[inline(always)]
pub fn row_cell(row: Row, x: usize) -> u8 {
    ((row >> (x as u32 * CELL_BITS)) & CELL_MASK) as u8
}

/// True iff every column of the row holds a nonzero color
pub fn line_complete(row: Row) -> bool {
    (0..PLAYFIELD_W as usize).all(|x| row_cell(row, x) != 0)
}

/// A garbage row: every column filled with the filler color except `gap`
pub fn garbage_row(gap: usize) -> Row {
    let mut row = EMPTY_ROW;
    for x in 0..PLAYFIELD_W as usize {
        if x != gap {
            row |= (GARBAGE_COLOR as u32) << (x as u32 * CELL_BITS);
        }
    }
    row
}

/// The playfield - 10 columns x 20 rows of packed color codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Playfield {
    rows: [Row; ROWS],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; ROWS],
        }
    }

    /// Create from raw packed rows, masking off bits beyond column 9
    pub fn from_rows(rows: [Row; ROWS]) -> Self {
        let mask = (1u32 << (PLAYFIELD_W as u32 * CELL_BITS)) - 1;
        Self {
            rows: rows.map(|row| row & mask),
        }
    }

    pub fn width(&self) -> u8 {
        PLAYFIELD_W
    }

    pub fn height(&self) -> u8 {
        PLAYFIELD_H
    }

    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Packed row at index `y` (0 = top)
    pub fn row(&self, y: usize) -> Option<Row> {
        self.rows.get(y).copied()
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < PLAYFIELD_W as i8 && y >= 0 && y < PLAYFIELD_H as i8
    }

    /// Get the color code at (x, y); `None` if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<u8> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(row_cell(self.rows[y as usize], x as usize))
    }

    /// Check if (x, y) is within bounds and empty
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.cell(x, y) == Some(0)
    }

    /// Overwrite the color code at (x, y)
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, x: i8, y: i8, color: u8) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        let shift = x as u32 * CELL_BITS;
        let row = &mut self.rows[y as usize];
        *row = (*row & !(CELL_MASK << shift)) | (((color as u32) & CELL_MASK) << shift);
        true
    }

    /// Merge a piece's cells into the playfield by OR-ing its color into each slot
    ///
    /// Cells outside the grid are skipped; an active piece never has any.
    pub fn flatten(&mut self, piece: &Piece) {
        let color = piece.color.code() as u32;
        for (x, y) in piece.cells() {
            if Self::in_bounds(x, y) {
                self.rows[y as usize] |= color << (x as u32 * CELL_BITS);
            }
        }
    }

    /// Remove complete rows and return how many were removed
    ///
    /// Rows are scanned once from the top. When row `i` is complete, every row
    /// above it moves down by one and row 0 becomes empty; scanning resumes at
    /// `i + 1`.
    pub fn process_complete_lines(&mut self) -> u32 {
        let mut complete = 0;
        for i in 0..ROWS {
            if line_complete(self.rows[i]) {
                self.rows.copy_within(0..i, 1);
                self.rows[0] = EMPTY_ROW;
                complete += 1;
            }
        }
        complete
    }

    /// Shift everything up one row (discarding the top row) and append a
    /// garbage row whose only hole is column `gap`
    pub fn push_garbage(&mut self, gap: usize) {
        self.rows.copy_within(1..ROWS, 0);
        self.rows[ROWS - 1] = garbage_row(gap);
    }

    /// Count of occupied cells
    pub fn filled_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|&row| (0..PLAYFIELD_W as usize).filter(|&x| row_cell(row, x) != 0).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&row| row == EMPTY_ROW)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
