//! 4×4 keypad matrix decoder.
//!
//! All lines are active-low. At rest every column is driven high and the
//! rows idle high through their pull-ups. To scan, one column at a time is
//! driven low while the other three are held high; a closed switch pulls its
//! row low. Holding the unselected columns high keeps a key in another column
//! from showing up on the selected one.
//!
//! ```text
//!            Row1  Row2  Row3  Row4
//! Column 1     7     4     1     C
//! Column 2     8     5     2     0
//! Column 3     9     6     3     =
//! Column 4     /     *     -     +
//! ```

use embedded_hal::digital::{InputPin, OutputPin};

use super::{Digit, LogicalKey};
use crate::calc::Operator;
use crate::config::{KEYPAD_COLUMNS, KEYPAD_ROWS};
use crate::error::Error;

const fn digit(value: u8) -> LogicalKey {
    LogicalKey::Digit(Digit(value))
}

/// Key legend at `KEYMAP[column][row]`.
pub const KEYMAP: [[LogicalKey; KEYPAD_ROWS]; KEYPAD_COLUMNS] = [
    [digit(7), digit(4), digit(1), LogicalKey::Clear],
    [digit(8), digit(5), digit(2), digit(0)],
    [digit(9), digit(6), digit(3), LogicalKey::Equals],
    [
        LogicalKey::Operator(Operator::Div),
        LogicalKey::Operator(Operator::Mul),
        LogicalKey::Operator(Operator::Sub),
        LogicalKey::Operator(Operator::Add),
    ],
];

/// Matrix position `(column, row)` of a key, zero-based.
pub fn position_of(key: LogicalKey) -> Option<(usize, usize)> {
    KEYMAP.iter().enumerate().find_map(|(col, keys)| {
        keys.iter()
            .position(|&candidate| candidate == key)
            .map(|row| (col, row))
    })
}

/// Stateless poller over four column outputs and four row inputs.
pub struct KeypadMatrix<C, R> {
    columns: [C; KEYPAD_COLUMNS],
    rows: [R; KEYPAD_ROWS],
}

impl<C, R> KeypadMatrix<C, R>
where
    C: OutputPin,
    R: InputPin,
{
    /// Columns and rows are given in legend order (column 1 / row 1 first).
    pub fn new(columns: [C; KEYPAD_COLUMNS], rows: [R; KEYPAD_ROWS]) -> Self {
        Self { columns, rows }
    }

    /// Scan all four columns and return the first closed switch.
    ///
    /// Columns are tested in order 1..4 and rows 1..4 within a column, so
    /// with several keys held the lowest column wins. `None` is returned only
    /// after every column has been tested.
    pub fn scan(&mut self) -> Result<Option<LogicalKey>, Error> {
        self.release_columns()?;

        for col in 0..KEYPAD_COLUMNS {
            self.select_column(col)?;
            for row in 0..KEYPAD_ROWS {
                if self.rows[row].is_low().map_err(|_| Error::Keypad)? {
                    self.release_columns()?;
                    return Ok(Some(KEYMAP[col][row]));
                }
            }
        }

        self.release_columns()?;
        Ok(None)
    }

    /// Drive every column high (inactive).
    pub fn release_columns(&mut self) -> Result<(), Error> {
        for column in self.columns.iter_mut() {
            column.set_high().map_err(|_| Error::Keypad)?;
        }
        Ok(())
    }

    /// Give the pins back.
    pub fn free(self) -> ([C; KEYPAD_COLUMNS], [R; KEYPAD_ROWS]) {
        (self.columns, self.rows)
    }

    fn select_column(&mut self, active: usize) -> Result<(), Error> {
        // Others go high first so two columns are never low together.
        for (index, column) in self.columns.iter_mut().enumerate() {
            if index != active {
                column.set_high().map_err(|_| Error::Keypad)?;
            }
        }
        self.columns[active].set_low().map_err(|_| Error::Keypad)
    }
}
