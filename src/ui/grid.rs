//! In-memory character grid.
//!
//! Behaves like a character LCD: `clear` blanks every cell and homes the
//! cursor, each written character advances the cursor by one column, and
//! characters past the last column are dropped. Only printable ASCII is
//! stored; anything else becomes `?`.

use core::convert::Infallible;

use super::CharDisplay;
use crate::config::{DISPLAY_COLUMNS, DISPLAY_ROWS};

const BLANK: u8 = b' ';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid<const ROWS: usize = DISPLAY_ROWS, const COLS: usize = DISPLAY_COLUMNS> {
    cells: [[u8; COLS]; ROWS],
    row: usize,
    col: usize,
}

impl<const ROWS: usize, const COLS: usize> CharGrid<ROWS, COLS> {
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; COLS]; ROWS],
            row: 0,
            col: 0,
        }
    }

    /// Full row contents including trailing blanks.
    pub fn row(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    /// Row contents without trailing blanks.
    pub fn row_text(&self, row: usize) -> &str {
        self.row(row).trim_end()
    }

    /// `(row, col)`. The column may equal `COLS` once a row is full.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn put(&mut self, byte: u8) {
        if self.col < COLS {
            self.cells[self.row][self.col] = byte;
            self.col += 1;
        }
    }
}

impl<const ROWS: usize, const COLS: usize> Default for CharGrid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> CharDisplay for CharGrid<ROWS, COLS> {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.cells = [[BLANK; COLS]; ROWS];
        self.row = 0;
        self.col = 0;
        Ok(())
    }

    /// Positions outside the grid are clamped to the last row / column.
    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
        self.row = usize::from(row).min(ROWS.saturating_sub(1));
        self.col = usize::from(col).min(COLS);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for c in text.chars() {
            let byte = if c.is_ascii_graphic() || c == ' ' {
                c as u8
            } else {
                b'?'
            };
            self.put(byte);
        }
        Ok(())
    }
}
