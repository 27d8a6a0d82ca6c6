//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and hardware-specific implementations.

pub mod analog;
pub mod delay;
pub mod display;
pub mod relay;

pub use analog::AnalogSource;
pub use delay::DelayProvider;
pub use display::{CharacterDisplay, DisplayError, DISPLAY_COLUMNS, DISPLAY_LINES};
pub use relay::RelayOutput;
