//! Timer configuration protocol
//!
//! Ordered register writes that move the PWM peripheral from one
//! configuration to the next without an invalid intermediate waveform.

pub mod protocol;

pub use protocol::TimerProtocol;
