//! Frequency and duty cycle conversion
//!
//! Pure arithmetic mapping operator values (Hz, percent) to timer register
//! values (divider band, period, compare counts), and the output state that
//! applies it.

pub mod band;
pub mod channel;
pub mod duty;

pub use band::{period_for, select_band, Prescaler};
pub use channel::{Channel, Duty, PwmChannelState, TimerSettings};
pub use duty::{clamp_percent, count_to_percentage, percentage_to_count, MAX_PERCENT};
