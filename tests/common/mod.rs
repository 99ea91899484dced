//! Simulated keypad hardware shared by the integration tests.
//!
//! A [`Bench`] holds a virtual clock and a schedule of key presses. Column
//! pins, row pins and the delay all share it: columns record which lines are
//! driven low, rows report low when a scheduled press sits at the crossing of
//! that row and a low column, and the delay advances the clock.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use keycalc::keypad::matrix::position_of;
use keycalc::keypad::{KeyEvents, KeypadMatrix};
use keycalc::LogicalKey;

const NS_PER_MS: u64 = 1_000_000;

#[derive(Clone, Copy, Debug)]
struct Press {
    column: usize,
    row: usize,
    from_ns: u64,
    until_ns: u64,
}

#[derive(Default)]
struct BenchState {
    now_ns: u64,
    driven_low: [bool; 4],
    presses: Vec<Press>,
    /// Number of columns driven low at each row read.
    low_columns_per_read: Vec<usize>,
}

impl BenchState {
    fn row_is_low(&mut self, row: usize) -> bool {
        self.low_columns_per_read
            .push(self.driven_low.iter().filter(|&&low| low).count());
        let now = self.now_ns;
        self.presses.iter().any(|p| {
            p.row == row && self.driven_low[p.column] && p.from_ns <= now && now < p.until_ns
        })
    }
}

#[derive(Clone, Default)]
pub struct Bench(Rc<RefCell<BenchState>>);

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `symbol` from `from_ms` (inclusive) to `until_ms` (exclusive).
    pub fn press(&self, symbol: char, from_ms: u64, until_ms: u64) -> &Self {
        let key = LogicalKey::from_symbol(symbol).expect("keypad legend");
        let (column, row) = position_of(key).expect("key on the matrix");
        self.0.borrow_mut().presses.push(Press {
            column,
            row,
            from_ns: from_ms * NS_PER_MS,
            until_ns: until_ms * NS_PER_MS,
        });
        self
    }

    /// Schedule `keys` one after another: each held for `hold_ms`, followed
    /// by `gap_ms` of idle. Returns the time after the last gap.
    pub fn type_keys(&self, keys: &str, start_ms: u64, hold_ms: u64, gap_ms: u64) -> u64 {
        let mut t = start_ms;
        for symbol in keys.chars() {
            self.press(symbol, t, t + hold_ms);
            t += hold_ms + gap_ms;
        }
        t
    }

    pub fn now_ms(&self) -> u64 {
        self.0.borrow().now_ns / NS_PER_MS
    }

    pub fn set_now_ms(&self, ms: u64) {
        self.0.borrow_mut().now_ns = ms * NS_PER_MS;
    }

    pub fn columns_high(&self) -> bool {
        self.0.borrow().driven_low.iter().all(|&low| !low)
    }

    /// Largest number of columns that were low together during a row read.
    pub fn max_low_columns_per_read(&self) -> usize {
        self.0
            .borrow()
            .low_columns_per_read
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
    }

    pub fn row_reads(&self) -> usize {
        self.0.borrow().low_columns_per_read.len()
    }

    pub fn matrix(&self) -> KeypadMatrix<SimColumn, SimRow> {
        let columns = [0, 1, 2, 3].map(|index| SimColumn {
            bench: self.clone(),
            index,
        });
        let rows = [0, 1, 2, 3].map(|index| SimRow {
            bench: self.clone(),
            index,
        });
        KeypadMatrix::new(columns, rows)
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            bench: self.clone(),
        }
    }

    pub fn key_events(&self) -> KeyEvents<SimColumn, SimRow, SimDelay> {
        KeyEvents::new(self.matrix(), self.delay())
    }
}

pub struct SimColumn {
    bench: Bench,
    index: usize,
}

impl ErrorType for SimColumn {
    type Error = Infallible;
}

impl OutputPin for SimColumn {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bench.0.borrow_mut().driven_low[self.index] = true;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bench.0.borrow_mut().driven_low[self.index] = false;
        Ok(())
    }
}

pub struct SimRow {
    bench: Bench,
    index: usize,
}

impl ErrorType for SimRow {
    type Error = Infallible;
}

impl InputPin for SimRow {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.bench.0.borrow_mut().row_is_low(self.index))
    }
}

/// Advances the bench clock instead of sleeping.
pub struct SimDelay {
    bench: Bench,
}

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.bench.0.borrow_mut().now_ns += u64::from(ns);
    }
}
