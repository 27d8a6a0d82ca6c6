//! GPIO lamp relay
//!
//! Drives the enlarger lamp relay via a GPIO pin (directly or through a
//! driver transistor). The reference board's relay is wired active-low:
//! driving the pin low lights the lamp.

use argentum_core::traits::RelayOutput;

use crate::gpio::OutputPin;

/// GPIO relay output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioRelay<P> {
    pin: P,
    /// If true, energized = pin LOW
    inverted: bool,
    /// Current logical state (true = energized)
    energized: bool,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Create a new GPIO relay output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the relay is energized when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            energized: false,
        };
        // The lamp must be dark from the first instruction
        relay.set_energized(false);
        relay
    }

    /// Create a relay with active-high output
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a relay with active-low output
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> RelayOutput for GpioRelay<P> {
    fn set_energized(&mut self, energized: bool) {
        self.energized = energized;

        if energized != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_energized(&self) -> bool {
        self.energized
    }
}
