//! Analog input trait for the control potentiometer

/// Trait for a blocking analog-to-digital converter
///
/// The conversion mechanism itself is a hardware concern; this trait
/// exposes it as a synchronous read that is assumed always available.
pub trait AnalogSource {
    /// Read one channel, returning a sample in `0..=1023`
    ///
    /// Blocks until the conversion completes. Implementations with a
    /// wider native range scale down to 10 bits.
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_channel(&mut self, channel: u8) -> u16;
}
