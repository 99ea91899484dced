//! keycalc firmware entry point (nRF52840).
//!
//! Wires the keypad GPIOs and the SSD1306 to the calculator and runs the
//! single key loop forever. See `config.rs` for the pin map.

#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Delay, Timer};
use keycalc::config::KEY_POLL_MS;
use keycalc::ui::display::OledDisplay;
use keycalc::{Calculator, KeyEvents, KeypadMatrix};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("keycalc starting");
    let p = embassy_nrf::init(Default::default());

    // Columns idle high; the matrix drives one low at a time.
    let columns = [
        Output::new(p.P0_28, Level::High, OutputDrive::Standard),
        Output::new(p.P0_29, Level::High, OutputDrive::Standard),
        Output::new(p.P0_30, Level::High, OutputDrive::Standard),
        Output::new(p.P0_31, Level::High, OutputDrive::Standard),
    ];
    let rows = [
        Input::new(p.P0_02, Pull::Up),
        Input::new(p.P0_03, Pull::Up),
        Input::new(p.P0_04, Pull::Up),
        Input::new(p.P0_05, Pull::Up),
    ];
    let mut keys = KeyEvents::new(KeypadMatrix::new(columns, rows), Delay);

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = unwrap!(OledDisplay::new(i2c));

    let mut calculator = Calculator::new(oled);
    if let Err(e) = calculator.start(&mut Delay).await {
        error!("Display: startup failed: {}", e);
    }

    loop {
        let key = match keys.next_key_event().await {
            Ok(key) => key,
            Err(e) => {
                error!("Keypad: {}", e);
                Timer::after_millis(u64::from(KEY_POLL_MS)).await;
                continue;
            }
        };

        info!("Key: {}", key);
        match calculator.handle_key(key) {
            Ok(Some(command)) => info!("Render: {} -> {}", command, calculator.state()),
            Ok(None) => {}
            Err(e) => error!("Display: {}", e),
        }
    }
}
