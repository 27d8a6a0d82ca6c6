//! Exposure controller
//!
//! Owns the user-facing control loop: polls the potentiometer, quantizes
//! the sample into a command zone, and sequences display updates and
//! relay actuation for the zone entered. Runs for the device's powered
//! lifetime.

use core::fmt::Write;

use heapless::String;

use crate::config::LoopTiming;
use crate::quantizer::ZoneTable;
use crate::state::State;
use crate::traits::{AnalogSource, CharacterDisplay, DelayProvider, DisplayError, RelayOutput};

/// First banner line, padded as rendered on the panel
pub const BANNER_LINE_0: &str = "    ENLARGER  ";

/// Second banner line
pub const BANNER_LINE_1: &str = "    TIMER V1  ";

const RESET_MESSAGE: &str = "RESET";
const BLANK_LINE: &str = "                ";

/// Configured exposure duration in seconds
///
/// Clamped to `[MIN, MAX]` under every mutation; there is no way to
/// construct or reach an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExposureTime(u8);

impl ExposureTime {
    /// Shortest configurable exposure
    pub const MIN: u8 = 1;
    /// Longest configurable exposure
    pub const MAX: u8 = 99;

    /// Create at the minimum duration
    pub const fn new() -> Self {
        Self(Self::MIN)
    }

    /// Step up one second, saturating at [`Self::MAX`]
    pub fn increment(&mut self) {
        if self.0 < Self::MAX {
            self.0 += 1;
        }
    }

    /// Step down one second, saturating at [`Self::MIN`]
    pub fn decrement(&mut self) {
        if self.0 > Self::MIN {
            self.0 -= 1;
        }
    }

    /// Return to the minimum duration
    pub fn reset(&mut self) {
        self.0 = Self::MIN;
    }

    /// Duration in whole seconds
    pub const fn seconds(&self) -> u8 {
        self.0
    }
}

impl Default for ExposureTime {
    fn default() -> Self {
        Self::new()
    }
}

/// The enlarger timer control loop
///
/// Generic over the four hardware capabilities so the same logic runs
/// against real peripherals and against recorded test doubles.
pub struct ExposureController<DSP, RLY, ADC, DLY> {
    display: DSP,
    relay: RLY,
    pot: ADC,
    delay: DLY,
    zones: ZoneTable,
    timing: LoopTiming,
    /// ADC channel the potentiometer is wired to
    channel: u8,
    time: ExposureTime,
    state: State,
}

impl<DSP, RLY, ADC, DLY> ExposureController<DSP, RLY, ADC, DLY>
where
    DSP: CharacterDisplay,
    RLY: RelayOutput,
    ADC: AnalogSource,
    DLY: DelayProvider,
{
    /// Create a controller with the factory zone calibration and timing
    pub fn new(display: DSP, relay: RLY, pot: ADC, delay: DLY) -> Self {
        Self {
            display,
            relay,
            pot,
            delay,
            zones: ZoneTable::default(),
            timing: LoopTiming::new(),
            channel: 0,
            time: ExposureTime::new(),
            state: State::Idle,
        }
    }

    /// Use a custom zone calibration
    pub fn with_zones(mut self, zones: ZoneTable) -> Self {
        self.zones = zones;
        self
    }

    /// Use custom loop timing
    pub fn with_timing(mut self, timing: LoopTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Read the potentiometer from a different ADC channel
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Currently configured exposure duration
    pub fn exposure_time(&self) -> ExposureTime {
        self.time
    }

    /// State entered on the most recent poll cycle
    pub fn state(&self) -> State {
        self.state
    }

    /// Show the startup banner, hold it, then clear
    ///
    /// Call once after display initialization, before the first poll.
    pub fn startup(&mut self) -> Result<(), DisplayError> {
        self.show_banner()
    }

    /// One control-loop iteration: sample, classify, dispatch
    ///
    /// Returns the state entered this cycle. An exposure run blocks here
    /// for its full duration; no input is sampled and no cancellation is
    /// possible while the lamp is lit.
    pub fn poll(&mut self) -> Result<State, DisplayError> {
        let sample = self.pot.read_channel(self.channel);
        let zone = self.zones.classify(sample);
        self.state = self.state.transition(zone);

        match self.state {
            State::AdjustUp => self.handle_adjust_up()?,
            State::AdjustDown => self.handle_adjust_down()?,
            State::Resetting => self.handle_reset()?,
            State::Exposing => self.handle_expose()?,
            State::Idle => self.handle_idle(),
        }

        Ok(self.state)
    }

    /// Run the control loop forever
    ///
    /// Addressing errors are ignored and the loop continues; the display
    /// is the only reporting channel this device has.
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.poll();
        }
    }

    fn handle_adjust_up(&mut self) -> Result<(), DisplayError> {
        self.time.increment();
        self.render_exposure_line()?;
        self.display.home();
        // Hold so a pot parked in-zone steps at a usable rate
        self.delay.delay_ms(self.timing.adjust_debounce_ms);
        Ok(())
    }

    fn handle_adjust_down(&mut self) -> Result<(), DisplayError> {
        self.time.decrement();
        self.render_exposure_line()?;
        self.display.home();
        self.delay.delay_ms(self.timing.adjust_debounce_ms);
        Ok(())
    }

    fn handle_reset(&mut self) -> Result<(), DisplayError> {
        self.display.clear();
        self.display.set_position(5, 0)?;
        self.display.write_str(RESET_MESSAGE);
        self.delay.delay_ms(self.timing.reset_hold_ms);
        self.time.reset();
        self.show_banner()
    }

    fn handle_expose(&mut self) -> Result<(), DisplayError> {
        self.render_exposure_line()?;
        self.display.set_position(0, 1)?;
        self.display.write_str(BLANK_LINE);
        self.display.home();

        self.relay.set_energized(true);
        let result = self.run_countdown();
        // The relay must drop on every path out of the countdown
        self.relay.set_energized(false);
        self.display.home();
        result
    }

    fn handle_idle(&mut self) {
        self.relay.set_energized(false);
    }

    /// Blocking countdown of one tick per configured second
    fn run_countdown(&mut self) -> Result<(), DisplayError> {
        for elapsed in 1..=self.time.seconds() {
            self.delay.delay_ms(self.timing.second_tick_ms);
            self.display.set_position(0, 1)?;
            let mut line: String<20> = String::new();
            let _ = write!(line, "{} sec last exp", elapsed);
            self.display.write_str(&line);
        }
        Ok(())
    }

    /// Render "<seconds> sec exposure" on line 0
    ///
    /// Trailing space scrubs the residue left when the value narrows
    /// from two digits to one.
    fn render_exposure_line(&mut self) -> Result<(), DisplayError> {
        self.display.set_position(0, 0)?;
        let mut line: String<20> = String::new();
        let _ = write!(line, "{} sec exposure ", self.time.seconds());
        self.display.write_str(&line);
        Ok(())
    }

    fn show_banner(&mut self) -> Result<(), DisplayError> {
        self.display.set_position(0, 0)?;
        self.display.write_str(BANNER_LINE_0);
        self.display.set_position(0, 1)?;
        self.display.write_str(BANNER_LINE_1);
        self.delay.delay_ms(self.timing.banner_hold_ms);
        self.display.clear();
        Ok(())
    }
}
