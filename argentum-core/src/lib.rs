//! Board-agnostic core logic for the enlarger timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, relay, analog input, delay)
//! - Signal quantizer mapping potentiometer samples to command zones
//! - State machine for the exposure control loop
//! - The exposure controller itself
//! - Timing configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod exposure;
pub mod quantizer;
pub mod state;
pub mod traits;
