//! Keypad debouncing.
//!
//! A raw scan is accepted only if the same key is still reported after the
//! settle interval. Once accepted, the sequencer waits for the whole matrix
//! to go idle before handing the key out. Holding a key therefore produces
//! one event, and a contact bounce that does not survive the settle interval
//! produces none.
//!
//! If the second scan disagrees with the first, the press is dropped, not
//! re-examined. The next poll starts over from scratch.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use super::{KeypadMatrix, LogicalKey};
use crate::config::{KEY_POLL_MS, KEY_SETTLE_MS};
use crate::error::Error;

/// Debounce timing parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTiming {
    /// Time between the two scans that must agree (ms).
    pub settle_ms: u32,
    /// Polling period while idle and while waiting for release (ms).
    pub poll_ms: u32,
}

impl Default for DebounceTiming {
    fn default() -> Self {
        Self {
            settle_ms: KEY_SETTLE_MS,
            poll_ms: KEY_POLL_MS,
        }
    }
}

/// Turns matrix scans into clean key-press events.
pub struct KeyEvents<C, R, D> {
    matrix: KeypadMatrix<C, R>,
    delay: D,
    timing: DebounceTiming,
}

impl<C, R, D> KeyEvents<C, R, D>
where
    C: OutputPin,
    R: InputPin,
    D: DelayNs,
{
    pub fn new(matrix: KeypadMatrix<C, R>, delay: D) -> Self {
        Self::with_timing(matrix, delay, DebounceTiming::default())
    }

    pub fn with_timing(matrix: KeypadMatrix<C, R>, delay: D, timing: DebounceTiming) -> Self {
        Self {
            matrix,
            delay,
            timing,
        }
    }

    pub fn timing(&self) -> DebounceTiming {
        self.timing
    }

    /// Run one debounce cycle.
    ///
    /// Returns `None` straight away when no key is down, or after the settle
    /// interval when the second scan disagrees. Otherwise waits for release
    /// and returns the confirmed key.
    pub async fn poll(&mut self) -> Result<Option<LogicalKey>, Error> {
        let Some(first) = self.matrix.scan()? else {
            return Ok(None);
        };

        self.delay.delay_ms(self.timing.settle_ms).await;

        let second = self.matrix.scan()?;
        if second != Some(first) {
            debug!("Keypad: bounce on {}, discarded", first.symbol());
            return Ok(None);
        }

        // Wait for release to avoid repeat triggers.
        while self.matrix.scan()?.is_some() {
            self.delay.delay_ms(self.timing.poll_ms).await;
        }

        debug!("Keypad: {}", first.symbol());
        Ok(Some(first))
    }

    /// Wait, without timeout, for the next confirmed key press.
    pub async fn next_key_event(&mut self) -> Result<LogicalKey, Error> {
        loop {
            if let Some(key) = self.poll().await? {
                return Ok(key);
            }
            self.delay.delay_ms(self.timing.poll_ms).await;
        }
    }

    /// Give the matrix and delay back.
    pub fn free(self) -> (KeypadMatrix<C, R>, D) {
        (self.matrix, self.delay)
    }
}
