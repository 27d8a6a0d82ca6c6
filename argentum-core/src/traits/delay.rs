//! Blocking delay trait
//!
//! All waits in the system are busy-wait blocking; there is no other work
//! to yield to. Routing them through this trait lets tests substitute a
//! virtual clock instead of real wall-clock waits.

/// Trait for blocking delays
pub trait DelayProvider {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms * 1_000);
    }
}
