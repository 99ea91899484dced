//! keycalc - four-function keypad calculator.
//!
//! Everything except the OLED backend and the firmware entry point is pure
//! logic over `embedded-hal` traits, so it builds and tests on the host.
//!
//! Usage: `cargo test` (host), `cargo run --release --features embedded`
//! (nRF52840 via probe-rs).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs is shared by that binary and the host tests.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod app;
pub mod calc;
pub mod config;
pub mod error;
pub mod keypad;
pub mod ui;

pub use app::Calculator;
pub use calc::{apply, evaluate, CalcError, CalculatorState, Operator, RenderCommand, Value};
pub use error::Error;
pub use keypad::{Digit, KeyEvents, KeypadMatrix, LogicalKey};
pub use ui::{CharDisplay, CharGrid};
