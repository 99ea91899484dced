//! User interface subsystem - two-row character display.
//!
//! The calculator talks to the display only through [`CharDisplay`], four
//! primitive operations modelled on an HD44780-style character LCD.
//!
//! ## Components
//!
//! - **Render**: turns a [`RenderCommand`](crate::calc::RenderCommand) into display operations
//! - **Grid**: in-memory 16×2 character buffer (host tests, OLED frame)
//! - **Display**: SSD1306 128×64 OLED via I²C showing the grid (embedded only)

#[cfg(feature = "embedded")]
pub mod display;
pub mod grid;
pub mod render;

pub use grid::CharGrid;
pub use render::{render, show_banner};

use core::fmt::Write;

use crate::calc::Value;

/// Character display capability.
///
/// `row` and `col` are zero-based. Writes start at the cursor and advance it.
pub trait CharDisplay {
    type Error;

    /// Blank the screen and home the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error>;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Write `value` in decimal: `-` prefix when negative, no leading zeros,
    /// zero as a single `0`.
    fn write_number(&mut self, value: Value) -> Result<(), Self::Error> {
        // "-2147483648" is 11 characters, so the write cannot run out of room.
        let mut text: heapless::String<12> = heapless::String::new();
        write!(text, "{}", value).ok();
        self.write_text(&text)
    }
}
