//! Keypad subsystem - 4×4 matrix decoder + debounced key events.
//!
//! ## Components
//!
//! - **Matrix**: one column driven low at a time, four pulled-up rows sensed
//! - **Debounce**: turns raw scans into one event per press-and-release

pub mod debounce;
pub mod matrix;

pub use debounce::{DebounceTiming, KeyEvents};
pub use matrix::{KeypadMatrix, KEYMAP};

use crate::calc::Operator;

/// A decimal digit `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII legend of this digit.
    pub const fn symbol(self) -> char {
        (b'0' + self.0) as char
    }
}

/// A key as printed on the keypad legend.
///
/// "No key pressed" is represented as `Option::<LogicalKey>::None` by the
/// scanning APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalKey {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
}

impl LogicalKey {
    /// Parse a keypad legend: `0-9`, `+ - * /`, `=` or `C`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => Digit::new(symbol as u8 - b'0').map(Self::Digit),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            other => Operator::from_symbol(other).map(Self::Operator),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Digit(d) => d.symbol(),
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn every_legend_parses_back_to_itself() {
        for symbol in "0123456789+-*/=C".chars() {
            let key = LogicalKey::from_symbol(symbol).unwrap();
            assert_eq!(key.symbol(), symbol);
        }
    }

    #[test]
    fn unknown_legends_are_rejected() {
        for symbol in ['c', '.', ' ', 'x', '%'] {
            assert!(LogicalKey::from_symbol(symbol).is_none());
        }
    }
}
