//! Character display drivers
//!
//! Split the way the hardware is: [`bus`] moves raw nibbles over the
//! wires with correct timing, [`hd44780`] sequences the controller's
//! command set on top of it.

pub mod bus;
pub mod hd44780;

pub use bus::{DisplayBus, ParallelBus, RegisterSelect};
pub use hd44780::Hd44780;
