//! Unified error type for keycalc.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::convert::Infallible;

/// Top-level I/O error type used across the application.
///
/// Arithmetic failures are not I/O errors; see [`crate::calc::CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Keypad
    /// Driving a column line or sensing a row line failed.
    Keypad,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}

// Convenience conversions

impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
