//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in argentum-core for the timer's peripherals:
//!
//! - 4-bit parallel display bus (bit-banged, enable-pulse timed)
//! - HD44780-class character display driver
//! - GPIO lamp relay (active-high or active-low)
//! - Delay bridge from embedded-hal implementations

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod display;
pub mod gpio;
pub mod relay;
