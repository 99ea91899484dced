//! SSD1306 OLED display wrapper.
//!
//! Presents the 128×64 panel as a 16×2 character display. Every operation
//! updates a [`CharGrid`] and redraws it, so the panel always mirrors the
//! grid.

use embedded_graphics::mono_font::ascii::FONT_7X13;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use super::{CharDisplay, CharGrid};
use crate::config::DISPLAY_ROWS;
use crate::error::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Pixel pitch between character rows (font height + spacing).
const ROW_PITCH: i32 = 16;

/// Vertical offset of the first character row.
const TOP_MARGIN: i32 = 4;

/// Character display backed by an SSD1306.
pub struct OledDisplay<I2C> {
    display: Display<I2C>,
    grid: CharGrid,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and blank the screen.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::Display)?;

        let mut oled = Self {
            display,
            grid: CharGrid::new(),
        };
        oled.redraw()?;
        Ok(oled)
    }

    /// Current character contents.
    pub fn grid(&self) -> &CharGrid {
        &self.grid
    }

    fn redraw(&mut self) -> Result<(), Error> {
        self.display.clear_buffer();

        for row in 0..DISPLAY_ROWS {
            let text = self.grid.row_text(row);
            if text.is_empty() {
                continue;
            }
            let y = TOP_MARGIN + row as i32 * ROW_PITCH;
            Text::with_baseline(text, Point::new(0, y), text_style(), Baseline::Top)
                .draw(&mut self.display)
                .map_err(|_| Error::Display)?;
        }

        self.display.flush().map_err(|_| Error::Display)
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_7X13)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> CharDisplay for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.grid.clear()?;
        self.redraw()
    }

    // The cursor is not drawn, so moving it needs no redraw.
    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), Self::Error> {
        self.grid.move_cursor(row, col)?;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.grid.write_text(text)?;
        self.redraw()
    }
}
