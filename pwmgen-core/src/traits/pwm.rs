//! PWM timer hardware trait
//!
//! One 16-bit timer with a period (TOP) register and two compare outputs.
//! Implementations translate these operations into peripheral registers;
//! the order they are called in is owned by
//! [`TimerProtocol`](crate::timer::TimerProtocol).

use crate::pwm::{Channel, Prescaler};

/// Trait for a two-channel PWM timer
pub trait PwmTimer {
    /// Select the waveform mode (fast PWM, TOP from the period register)
    /// and non-inverting output on both compare channels
    fn configure_waveform(&mut self);

    /// Stop the counter clock
    fn stop(&mut self);

    /// Select the clock divider
    fn set_prescaler(&mut self, prescaler: Prescaler);

    /// Load the period register
    fn set_period(&mut self, period: u16);

    /// Load channel A's compare register
    fn set_duty_a(&mut self, count: u16);

    /// Load channel B's compare register
    fn set_duty_b(&mut self, count: u16);

    /// Start the counter clock with the selected divider
    fn start(&mut self);

    /// Load a channel's compare register
    fn set_duty(&mut self, channel: Channel, count: u16) {
        match channel {
            Channel::A => self.set_duty_a(count),
            Channel::B => self.set_duty_b(count),
        }
    }
}
