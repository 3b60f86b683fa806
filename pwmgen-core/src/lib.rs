//! Board-agnostic core logic for the pwmgen panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (keypad, character display, PWM timer)
//! - Keypad entry state machine
//! - Frequency band and duty cycle conversion
//! - Timer register write sequence
//! - Screen layouts and the controller tying it all together
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod panel;
pub mod pwm;
pub mod timer;
pub mod traits;

#[cfg(test)]
mod screen;
#[cfg(test)]
mod testing;

pub use controller::Controller;
