//! Delay bridge
//!
//! Adapts any `embedded-hal` delay implementation to the core
//! [`DelayProvider`] capability, so platform HALs plug in without the
//! core crate depending on embedded-hal.

use argentum_core::traits::DelayProvider;
use embedded_hal::delay::DelayNs;

/// Newtype bridging an embedded-hal delay into the control loop
pub struct HalDelay<D>(pub D);

impl<D: DelayNs> DelayProvider for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
