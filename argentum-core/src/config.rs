//! Timing configuration type definitions
//!
//! Every wait in the system traces back to one of these named values;
//! inline delay literals are not used anywhere in the control path.

/// Display bus timing
///
/// Matches the HD44780-class controller's minimum setup/hold and
/// instruction-execution times, with margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTiming {
    /// Power-stabilization wait before the init sequence (ms)
    pub power_on_ms: u32,
    /// Setup/hold time around each enable pulse edge (us)
    pub enable_pulse_us: u32,
    /// Settle wait before each byte, covering instruction execution (ms)
    pub command_settle_ms: u32,
}

impl BusTiming {
    /// Timing for a standard HD44780 at any supported clock
    pub const fn new() -> Self {
        Self {
            power_on_ms: 15,
            enable_pulse_us: 10,
            command_settle_ms: 5,
        }
    }
}

impl Default for BusTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Control loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopTiming {
    /// Hold after an adjust step while the pot sits in-zone, so a held
    /// control steps at a usable rate (ms)
    pub adjust_debounce_ms: u32,
    /// How long the RESET message stays up (ms)
    pub reset_hold_ms: u32,
    /// How long the startup banner stays up (ms)
    pub banner_hold_ms: u32,
    /// Wall-clock length of one countdown tick (ms)
    ///
    /// Calibrated so that one tick plus the render overhead of the
    /// countdown loop comes out at one real second. This is a hardware
    /// calibration constant: changing it skews exposure accuracy
    /// one-for-one.
    pub second_tick_ms: u32,
}

impl LoopTiming {
    /// Timing calibrated for the reference board
    pub const fn new() -> Self {
        Self {
            adjust_debounce_ms: 200,
            reset_hold_ms: 1_000,
            banner_hold_ms: 4_000,
            second_tick_ms: 915,
        }
    }
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self::new()
    }
}
