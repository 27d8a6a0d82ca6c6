//! Lamp relay output trait

/// Trait for the enlarger lamp relay
///
/// Implementations control the relay coil via GPIO, directly or through
/// a driver transistor.
pub trait RelayOutput {
    /// Energize or de-energize the relay
    ///
    /// Energized powers the enlarger lamp.
    fn set_energized(&mut self, energized: bool);

    /// Check if the relay is currently energized
    fn is_energized(&self) -> bool;
}
