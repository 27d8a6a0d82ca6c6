//! End-to-end exercise of the control loop through the real driver stack
//!
//! Runs the exposure controller against an Hd44780 on the bit-banged
//! parallel bus, with a probe on the wires that latches nibbles on each
//! enable rising edge and pairs them back into bytes, the way the
//! physical controller does.

use core::cell::RefCell;

use argentum_core::exposure::ExposureController;
use argentum_core::state::State;
use argentum_core::traits::{AnalogSource, DelayProvider, RelayOutput};
use argentum_drivers::display::hd44780::commands;
use argentum_drivers::display::{Hd44780, ParallelBus, RegisterSelect};
use argentum_drivers::gpio::OutputPin;
use argentum_drivers::relay::GpioRelay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    RegisterSelect,
    ReadWrite,
    Enable,
    Data(u8),
}

#[derive(Default)]
struct WireState {
    rs: bool,
    data: [bool; 4],
    pending_high: Option<u8>,
}

/// Decodes the 4-bit wire protocol back into (byte, register) pairs
#[derive(Default)]
struct PanelProbe {
    wires: RefCell<WireState>,
    bytes: RefCell<Vec<(u8, RegisterSelect)>>,
}

impl PanelProbe {
    fn set(&self, line: Line, high: bool) {
        let mut wires = self.wires.borrow_mut();
        match line {
            Line::RegisterSelect => wires.rs = high,
            Line::ReadWrite => {}
            Line::Data(bit) => wires.data[bit as usize] = high,
            Line::Enable => {
                if high {
                    let nibble = wires
                        .data
                        .iter()
                        .enumerate()
                        .fold(0u8, |acc, (bit, &level)| acc | ((level as u8) << bit));
                    match wires.pending_high.take() {
                        None => wires.pending_high = Some(nibble),
                        Some(high_nibble) => {
                            let select = if wires.rs {
                                RegisterSelect::Data
                            } else {
                                RegisterSelect::Command
                            };
                            self.bytes
                                .borrow_mut()
                                .push(((high_nibble << 4) | nibble, select));
                        }
                    }
                }
            }
        }
    }

    /// Data-register bytes received after the last occurrence of the
    /// given command, up to the next command byte
    fn text_after(&self, command: u8) -> String {
        let bytes = self.bytes.borrow();
        let mut out = String::new();
        let mut collecting = false;
        for &(byte, select) in bytes.iter() {
            match select {
                RegisterSelect::Command => {
                    if byte == command {
                        collecting = true;
                        out.clear();
                    } else {
                        collecting = false;
                    }
                }
                RegisterSelect::Data => {
                    if collecting {
                        out.push(byte as char);
                    }
                }
            }
        }
        out
    }
}

struct ProbePin<'a> {
    line: Line,
    probe: &'a PanelProbe,
}

impl OutputPin for ProbePin<'_> {
    fn set_high(&mut self) {
        self.probe.set(self.line, true);
    }

    fn set_low(&mut self) {
        self.probe.set(self.line, false);
    }

    fn is_set_high(&self) -> bool {
        false
    }
}

/// Relay coil probe recording every level the pin is driven to
#[derive(Default)]
struct CoilProbe {
    levels: RefCell<Vec<bool>>,
}

struct CoilPin<'a> {
    probe: &'a CoilProbe,
}

impl OutputPin for CoilPin<'_> {
    fn set_high(&mut self) {
        self.probe.levels.borrow_mut().push(true);
    }

    fn set_low(&mut self) {
        self.probe.levels.borrow_mut().push(false);
    }

    fn is_set_high(&self) -> bool {
        self.probe.levels.borrow().last().copied().unwrap_or(false)
    }
}

struct NullDelay;

impl DelayProvider for NullDelay {
    fn delay_us(&mut self, _us: u32) {}
}

struct FixedPot(u16);

impl AnalogSource for FixedPot {
    fn read_channel(&mut self, _channel: u8) -> u16 {
        self.0
    }
}

fn lcd(probe: &PanelProbe) -> Hd44780<ParallelBus<ProbePin<'_>, NullDelay>> {
    let pin = |line| ProbePin { line, probe };
    let bus = ParallelBus::new(
        pin(Line::RegisterSelect),
        pin(Line::ReadWrite),
        pin(Line::Enable),
        [
            pin(Line::Data(0)),
            pin(Line::Data(1)),
            pin(Line::Data(2)),
            pin(Line::Data(3)),
        ],
        NullDelay,
    );
    Hd44780::new(bus)
}

#[test]
fn initialization_reaches_the_wires_in_order() {
    let probe = PanelProbe::default();
    let mut display = lcd(&probe);

    display.initialize();

    let expected: Vec<(u8, RegisterSelect)> = [
        commands::HOME,
        commands::FUNCTION_SET,
        commands::DISPLAY_SETUP,
        commands::ENTRY_MODE,
        commands::CLEAR,
        commands::LINE_0_ADDR,
    ]
    .iter()
    .map(|&byte| (byte, RegisterSelect::Command))
    .collect();

    assert_eq!(*probe.bytes.borrow(), expected);
}

#[test]
fn increment_renders_through_the_wire_protocol() {
    let probe = PanelProbe::default();
    let coil = CoilProbe::default();

    let display = lcd(&probe);
    let relay = GpioRelay::active_low(CoilPin { probe: &coil });
    let mut controller = ExposureController::new(display, relay, FixedPot(750), NullDelay);

    let state = controller.poll().unwrap();

    assert_eq!(state, State::AdjustUp);
    // Line 0 address, then the rendered text as data bytes
    assert_eq!(probe.text_after(commands::LINE_0_ADDR), "2 sec exposure ");
    // Adjusting never touches the lamp beyond the initial safe level
    assert_eq!(*coil.levels.borrow(), vec![true]);
}

#[test]
fn exposure_drives_the_coil_active_low() {
    let probe = PanelProbe::default();
    let coil = CoilProbe::default();

    let display = lcd(&probe);
    let relay = GpioRelay::active_low(CoilPin { probe: &coil });
    let mut controller = ExposureController::new(display, relay, FixedPot(5), NullDelay);

    let state = controller.poll().unwrap();

    assert_eq!(state, State::Exposing);
    // Construction parks the coil high (dark), the run pulls it low for
    // the exposure, then releases it high again
    assert_eq!(*coil.levels.borrow(), vec![true, false, true]);
    // One-second default exposure: the countdown rendered its only tick
    assert_eq!(probe.text_after(commands::LINE_1_ADDR), "1 sec last exp");
}
