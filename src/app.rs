//! Calculator application - owns the state machine state and the display.
//!
//! The firmware loop is:
//!
//! ```text
//! start() ──► next_key_event() ──► handle_key() ──┐
//!                   ▲                             │
//!                   └─────────────────────────────┘
//! ```

use embedded_hal_async::delay::DelayNs;

use crate::calc::{apply, CalculatorState, RenderCommand};
use crate::config::BANNER_MS;
use crate::keypad::LogicalKey;
use crate::ui::{render, show_banner, CharDisplay};

pub struct Calculator<D> {
    state: CalculatorState,
    display: D,
}

impl<D: CharDisplay> Calculator<D> {
    pub fn new(display: D) -> Self {
        Self {
            state: CalculatorState::new(),
            display,
        }
    }

    /// Show the banner for [`BANNER_MS`], then the `Enter:` prompt.
    pub async fn start(&mut self, delay: &mut impl DelayNs) -> Result<(), D::Error> {
        show_banner(&mut self.display)?;
        delay.delay_ms(BANNER_MS).await;
        render(&mut self.display, &RenderCommand::Prompt)?;
        info!("Calculator ready");
        Ok(())
    }

    /// Apply one key and update the display.
    ///
    /// Returns what was rendered, or `None` if the key was ignored. If the
    /// display fails the error is returned and the state is left as it was.
    pub fn handle_key(&mut self, key: LogicalKey) -> Result<Option<RenderCommand>, D::Error> {
        let (next, command) = apply(self.state, key);

        // State only moves on once the screen shows it.
        match command {
            Some(ref command) => render(&mut self.display, command)?,
            None => debug!("Calc: key {} ignored", key.symbol()),
        }
        self.state = next;
        Ok(command)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }
}
