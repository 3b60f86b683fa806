//! Timer configuration write sequence
//!
//! The timer free-runs once started, so every reconfiguration stops the
//! counter clock, loads period and both compare registers, and only then
//! restarts the clock with the new divider. The waveform and output mode is
//! set up once during [`TimerProtocol::initialize`] and never touched again.

use crate::pwm::{Channel, TimerSettings};
use crate::traits::PwmTimer;

/// Owns the PWM timer and the order its registers are written in
pub struct TimerProtocol<T: PwmTimer> {
    timer: T,
    initialized: bool,
}

impl<T: PwmTimer> TimerProtocol<T> {
    /// Wrap a timer; nothing is written until [`initialize`](Self::initialize)
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            initialized: false,
        }
    }

    /// First-time setup: waveform mode, registers, then start
    pub fn initialize(&mut self, settings: &TimerSettings) {
        self.timer.stop();
        self.timer.configure_waveform();
        self.load(settings);
        self.initialized = true;
    }

    /// Apply a new divider/period/duty set
    ///
    /// Falls back to [`initialize`](Self::initialize) if the waveform mode
    /// has not been configured yet.
    pub fn reconfigure(&mut self, settings: &TimerSettings) {
        if !self.initialized {
            self.initialize(settings);
            return;
        }
        self.timer.stop();
        self.load(settings);
    }

    /// Change one compare register while the timer keeps running
    pub fn update_duty(&mut self, channel: Channel, count: u16) {
        self.timer.set_duty(channel, count);
    }

    /// Borrow the underlying timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Registers in order, divider last since selecting it restarts the clock
    fn load(&mut self, settings: &TimerSettings) {
        self.timer.set_period(settings.period);
        self.timer.set_duty_a(settings.duty_a);
        self.timer.set_duty_b(settings.duty_b);
        self.timer.set_prescaler(settings.prescaler);
        self.timer.start();
    }
}
