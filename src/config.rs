//! Compile-time settings for the calculator.
//!
//! Keypad geometry and debounce timing, the character display layout and
//! the fixed strings it shows.

// Keypad

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Column 1..4 (outputs, active-low) → P0.28, P0.29, P0.30, P0.31
//   Row 1..4    (inputs, pull-up)     → P0.02, P0.03, P0.04, P0.05
//   I²C SDA                           → P0.26
//   I²C SCL                           → P0.27

/// Number of keypad column lines (driven).
pub const KEYPAD_COLUMNS: usize = 4;

/// Number of keypad row lines (sensed).
pub const KEYPAD_ROWS: usize = 4;

/// Time a press must persist before it is accepted (ms).
pub const KEY_SETTLE_MS: u32 = 25;

/// Interval between matrix polls while idle or waiting for release (ms).
pub const KEY_POLL_MS: u32 = 1;

// Display

/// Character rows on the display. Row 0 = label, row 1 = input/result.
pub const DISPLAY_ROWS: usize = 2;

/// Characters per display row.
pub const DISPLAY_COLUMNS: usize = 16;

/// Row carrying the prompt / result label.
pub const LABEL_ROW: u8 = 0;

/// Row carrying the digits being typed or the result.
pub const VALUE_ROW: u8 = 1;

/// Startup banner text.
pub const BANNER_TEXT: &str = "nRF52840 Calc";

/// How long the banner stays up before the first prompt (ms).
pub const BANNER_MS: u32 = 800;

/// Label shown while waiting for the first operand.
pub const PROMPT_TEXT: &str = "Enter:";

/// Label shown above an evaluation result.
pub const RESULT_TEXT: &str = "Result:";

/// Shown in place of a value when dividing by zero.
pub const DIV_ZERO_TEXT: &str = "Error: /0";

/// Shown in place of a value when the result does not fit in 32 bits.
pub const OVERFLOW_TEXT: &str = "Error: OVF";
