//! HD44780-class character display driver
//!
//! Sequences the controller through its documented initialization and
//! exposes character/command/cursor operations on top of any
//! [`DisplayBus`]. All mutation funnels through the byte-write path, so
//! nothing bypasses the settle-delay discipline the bus enforces.

use argentum_core::config::BusTiming;
use argentum_core::traits::{CharacterDisplay, DisplayError, DISPLAY_COLUMNS, DISPLAY_LINES};

use super::bus::{DisplayBus, RegisterSelect};

/// Command set for the Hitachi HD44780-class display controller
pub mod commands {
    /// Clear the display and reset the address counter
    pub const CLEAR: u8 = 0x01;
    /// Return the cursor to the first cell
    pub const HOME: u8 = 0x02;
    /// Move the cursor back one cell
    pub const CURSOR_BACK: u8 = 0x10;
    /// Move the cursor forward one cell
    pub const CURSOR_FORWARD: u8 = 0x14;
    /// Pan the visible window left
    pub const PAN_LEFT: u8 = 0x18;
    /// Pan the visible window right
    pub const PAN_RIGHT: u8 = 0x1C;
    /// Display on, cursor off, blink off
    pub const DISPLAY_SETUP: u8 = 0x0C;
    /// Display on, cursor visible
    pub const CURSOR_ON: u8 = 0x0E;
    /// Display on, cursor visible and blinking
    pub const CURSOR_BLINK: u8 = 0x0F;
    /// 4-bit interface, 2 lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    /// Auto-increment entry mode
    pub const ENTRY_MODE: u8 = 0x06;
    /// DDRAM base address of line 0
    pub const LINE_0_ADDR: u8 = 0x80;
    /// DDRAM base address of line 1
    pub const LINE_1_ADDR: u8 = 0xC0;
}

/// Driver for a 16x2 panel on an HD44780-class controller
pub struct Hd44780<B> {
    bus: B,
    timing: BusTiming,
}

impl<B: DisplayBus> Hd44780<B> {
    /// Create a driver over the given bus with standard timing
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            timing: BusTiming::new(),
        }
    }

    /// Use custom controller timing
    pub fn with_timing(mut self, timing: BusTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Run the controller's full initialization sequence
    ///
    /// Waits out power stabilization, then issues reset, function set,
    /// display setup, entry mode, clear, and finally parks the cursor at
    /// the first cell of line 0. Idempotent only as a complete re-init;
    /// not cheap to call repeatedly.
    pub fn initialize(&mut self) {
        self.bus.wait_ms(self.timing.power_on_ms);
        self.put_command(commands::HOME);
        self.put_command(commands::FUNCTION_SET);
        self.put_command(commands::DISPLAY_SETUP);
        self.put_command(commands::ENTRY_MODE);
        self.put_command(commands::CLEAR);
        self.put_command(commands::LINE_0_ADDR);
    }

    /// Write a byte to the instruction register
    pub fn put_command(&mut self, command: u8) {
        self.bus.write_byte(command, RegisterSelect::Command);
    }

    /// Write a character to the data register
    ///
    /// The controller's cursor advances per entry mode.
    pub fn put_char(&mut self, ch: u8) {
        self.bus.write_byte(ch, RegisterSelect::Data);
    }

    /// Write a string starting at the current cursor
    pub fn put_str(&mut self, text: &str) {
        for ch in text.bytes() {
            self.put_char(ch);
        }
    }
}

impl<B: DisplayBus> CharacterDisplay for Hd44780<B> {
    fn clear(&mut self) {
        self.put_command(commands::CLEAR);
    }

    fn home(&mut self) {
        self.put_command(commands::HOME);
    }

    fn set_position(&mut self, column: u8, line: u8) -> Result<(), DisplayError> {
        if column >= DISPLAY_COLUMNS || line >= DISPLAY_LINES {
            return Err(DisplayError::AddressOutOfRange);
        }

        let base = if line == 1 {
            commands::LINE_1_ADDR
        } else {
            commands::LINE_0_ADDR
        };
        self.put_command(base | column);
        // Wait out the address-set instruction before the next write
        self.bus.wait_ms(self.timing.command_settle_ms);
        Ok(())
    }

    fn write_char(&mut self, ch: u8) {
        self.put_char(ch);
    }

    fn write_str(&mut self, text: &str) {
        self.put_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Recording bus double
    struct MockBus {
        bytes: Vec<(u8, RegisterSelect), 64>,
        waits_ms: Vec<u32, 16>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                bytes: Vec::new(),
                waits_ms: Vec::new(),
            }
        }
    }

    impl DisplayBus for MockBus {
        fn write_byte(&mut self, byte: u8, select: RegisterSelect) {
            let _ = self.bytes.push((byte, select));
        }

        fn wait_ms(&mut self, ms: u32) {
            let _ = self.waits_ms.push(ms);
        }
    }

    #[test]
    fn test_initialize_sequence() {
        let mut lcd = Hd44780::new(MockBus::new());

        lcd.initialize();

        assert_eq!(lcd.bus.waits_ms.as_slice(), &[15]);
        assert_eq!(
            lcd.bus.bytes.as_slice(),
            &[
                (commands::HOME, RegisterSelect::Command),
                (commands::FUNCTION_SET, RegisterSelect::Command),
                (commands::DISPLAY_SETUP, RegisterSelect::Command),
                (commands::ENTRY_MODE, RegisterSelect::Command),
                (commands::CLEAR, RegisterSelect::Command),
                (commands::LINE_0_ADDR, RegisterSelect::Command),
            ]
        );
    }

    #[test]
    fn test_set_position_line_bases() {
        let mut lcd = Hd44780::new(MockBus::new());

        lcd.set_position(3, 0).unwrap();
        lcd.set_position(7, 1).unwrap();

        assert_eq!(
            lcd.bus.bytes.as_slice(),
            &[
                (0x83, RegisterSelect::Command),
                (0xC7, RegisterSelect::Command),
            ]
        );
        // Address-set settles after each move
        assert_eq!(lcd.bus.waits_ms.as_slice(), &[5, 5]);
    }

    #[test]
    fn test_out_of_range_position_is_rejected() {
        let mut lcd = Hd44780::new(MockBus::new());

        assert_eq!(
            lcd.set_position(DISPLAY_COLUMNS, 0),
            Err(DisplayError::AddressOutOfRange)
        );
        assert_eq!(
            lcd.set_position(0, DISPLAY_LINES),
            Err(DisplayError::AddressOutOfRange)
        );
        assert_eq!(
            lcd.set_position(255, 255),
            Err(DisplayError::AddressOutOfRange)
        );

        // No bus traffic for rejected addresses
        assert!(lcd.bus.bytes.is_empty());
        assert!(lcd.bus.waits_ms.is_empty());
    }

    #[test]
    fn test_corner_positions_accepted() {
        let mut lcd = Hd44780::new(MockBus::new());

        lcd.set_position(0, 0).unwrap();
        lcd.set_position(15, 1).unwrap();

        assert_eq!(
            lcd.bus.bytes.as_slice(),
            &[
                (0x80, RegisterSelect::Command),
                (0xCF, RegisterSelect::Command),
            ]
        );
    }

    #[test]
    fn test_put_str_is_data_register_writes() {
        let mut lcd = Hd44780::new(MockBus::new());

        lcd.put_str("OK");

        assert_eq!(
            lcd.bus.bytes.as_slice(),
            &[
                (b'O', RegisterSelect::Data),
                (b'K', RegisterSelect::Data),
            ]
        );
    }

    #[test]
    fn test_clear_and_home_are_commands() {
        let mut lcd = Hd44780::new(MockBus::new());

        lcd.clear();
        lcd.home();

        assert_eq!(
            lcd.bus.bytes.as_slice(),
            &[
                (commands::CLEAR, RegisterSelect::Command),
                (commands::HOME, RegisterSelect::Command),
            ]
        );
    }
}
