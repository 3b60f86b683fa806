//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in pwmgen-core on top of `embedded-hal` pins and delays:
//!
//! - Matrix keypad scanner
//! - HD44780 character LCD (8-bit parallel)

#![no_std]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;
