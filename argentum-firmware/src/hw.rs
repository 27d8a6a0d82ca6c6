//! Adapters from embassy-rp peripherals to the driver traits

use argentum_core::traits::AnalogSource;
use argentum_drivers::gpio::OutputPin;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Output, Pull};
use embassy_rp::peripherals::PIN_26;

/// Push-pull output pin
pub struct OutPin(pub Output<'static>);

impl OutputPin for OutPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Potentiometer input on ADC0
pub struct PotInput {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl PotInput {
    /// Claim the wiper pin and wrap the blocking ADC
    pub fn new(adc: Adc<'static, Blocking>, pin: PIN_26) -> Self {
        Self {
            adc,
            channel: Channel::new_pin(pin, Pull::None),
        }
    }
}

impl AnalogSource for PotInput {
    fn read_channel(&mut self, _channel: u8) -> u16 {
        // RP2040 ADC is 12-bit; the zone calibration is 10-bit
        self.adc.blocking_read(&mut self.channel).unwrap_or(0) >> 2
    }
}
