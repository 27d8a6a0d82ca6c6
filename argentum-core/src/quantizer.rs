//! Signal quantizer
//!
//! Maps a raw potentiometer sample to one of five command zones. The
//! zone bands are a data-driven table calibrated to the reference
//! potentiometer's travel, so the calibration can be adjusted and tested
//! independently of the control loop.

use heapless::Vec;

/// Maximum bands a zone table can hold
pub const MAX_ZONE_BANDS: usize = 8;

/// Discrete user intents derived from the potentiometer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandZone {
    /// Step the exposure time up
    Increment,
    /// Step the exposure time down
    Decrement,
    /// Reset the exposure time and replay the banner
    Reset,
    /// Run an exposure
    Expose,
    /// No command; the pot is parked outside every band
    Idle,
}

/// Errors that can occur during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QuantizeError {
    /// The sample falls into no calibrated band
    OutOfCalibratedBand,
}

/// One calibrated band of the potentiometer's travel
///
/// Bounds are strictly exclusive: a band matches when
/// `lower < sample < upper`. Samples landing exactly on a bound match
/// no band and classify as [`CommandZone::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneBand {
    /// Exclusive lower bound; `None` for a band open towards zero
    pub lower: Option<u16>,
    /// Exclusive upper bound
    pub upper: u16,
    /// Zone this band maps to
    pub zone: CommandZone,
}

impl ZoneBand {
    /// Band matching `lower < sample < upper`
    pub const fn bounded(lower: u16, upper: u16, zone: CommandZone) -> Self {
        Self {
            lower: Some(lower),
            upper,
            zone,
        }
    }

    /// Band matching `sample < upper`
    pub const fn below(upper: u16, zone: CommandZone) -> Self {
        Self {
            lower: None,
            upper,
            zone,
        }
    }

    /// Check whether a sample falls inside this band
    pub fn contains(&self, sample: u16) -> bool {
        let above_lower = match self.lower {
            Some(lower) => sample > lower,
            None => true,
        };
        above_lower && sample < self.upper
    }
}

/// Factory calibration for the reference 10k potentiometer
///
/// The adjust/reset bands sit in the upper third of travel, the expose
/// band at the very bottom, with dead travel between them so the pot can
/// rest without issuing commands.
pub const DEFAULT_BANDS: [ZoneBand; 4] = [
    ZoneBand::bounded(700, 800, CommandZone::Increment),
    ZoneBand::bounded(600, 700, CommandZone::Decrement),
    ZoneBand::bounded(500, 600, CommandZone::Reset),
    ZoneBand::below(10, CommandZone::Expose),
];

/// Calibrated classification table
///
/// Classification is pure: the same sample always yields the same zone,
/// with no hysteresis and no debouncing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneTable {
    bands: Vec<ZoneBand, MAX_ZONE_BANDS>,
}

impl ZoneTable {
    /// Build a table from a custom calibration
    ///
    /// Returns `None` if more than [`MAX_ZONE_BANDS`] bands are given.
    pub fn from_bands(bands: &[ZoneBand]) -> Option<Self> {
        Vec::from_slice(bands).ok().map(|bands| Self { bands })
    }

    /// Classify a sample, reporting samples outside every band
    pub fn try_classify(&self, sample: u16) -> Result<CommandZone, QuantizeError> {
        self.bands
            .iter()
            .find(|band| band.contains(sample))
            .map(|band| band.zone)
            .ok_or(QuantizeError::OutOfCalibratedBand)
    }

    /// Classify a sample
    ///
    /// Total over the whole sample range: out-of-band samples are
    /// [`CommandZone::Idle`] by policy.
    pub fn classify(&self, sample: u16) -> CommandZone {
        self.try_classify(sample).unwrap_or(CommandZone::Idle)
    }
}

impl Default for ZoneTable {
    /// Table carrying [`DEFAULT_BANDS`]
    fn default() -> Self {
        // DEFAULT_BANDS length is static, always within capacity
        Self::from_bands(&DEFAULT_BANDS).unwrap_or(Self { bands: Vec::new() })
    }
}
