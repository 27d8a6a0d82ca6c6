//! Argentum - Darkroom Enlarger Timer Firmware
//!
//! Main firmware binary for RP2040-based enlarger timers. Wires the
//! display, relay, and potentiometer drivers to the board and hands the
//! rest to the exposure controller's blocking loop.
//!
//! Wiring (reference board):
//!
//! ```text
//! GP2..GP5  -> LCD D4..D7
//! GP6       -> LCD EN
//! GP7       -> LCD RS
//! GP8       -> LCD RW (held low; the bus never reads back)
//! GP15      -> relay driver (active-low)
//! GP26/ADC0 -> potentiometer wiper
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use argentum_core::exposure::ExposureController;
use argentum_drivers::clock::HalDelay;
use argentum_drivers::display::{Hd44780, ParallelBus};
use argentum_drivers::relay::GpioRelay;

mod hw;

use hw::{OutPin, PotInput};

/// ADC channel the potentiometer is wired to
const POT_CHANNEL: u8 = 0;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Argentum firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let bus = ParallelBus::new(
        OutPin(Output::new(p.PIN_7, Level::Low)),
        OutPin(Output::new(p.PIN_8, Level::Low)),
        OutPin(Output::new(p.PIN_6, Level::Low)),
        [
            OutPin(Output::new(p.PIN_2, Level::Low)),
            OutPin(Output::new(p.PIN_3, Level::Low)),
            OutPin(Output::new(p.PIN_4, Level::Low)),
            OutPin(Output::new(p.PIN_5, Level::Low)),
        ],
        HalDelay(Delay),
    );
    let mut display = Hd44780::new(bus);
    display.initialize();
    info!("Display initialized");

    // Relay driver is active-low; start with the lamp dark
    let relay = GpioRelay::active_low(OutPin(Output::new(p.PIN_15, Level::High)));

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let pot = PotInput::new(adc, p.PIN_26);

    let mut controller =
        ExposureController::new(display, relay, pot, HalDelay(Delay)).with_channel(POT_CHANNEL);

    if controller.startup().is_err() {
        warn!("Banner render rejected; continuing");
    }

    info!("Entering control loop");
    controller.run()
}
