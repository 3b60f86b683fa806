//! PWM output state
//!
//! Holds the frequency, divider band, period and both duty channels as they
//! are (or are about to be) programmed into the timer.

use super::band::{select_band, Prescaler};
use super::duty::{clamp_percent, count_to_percentage, percentage_to_count};
use crate::config::PwmConfig;

/// PWM output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

impl Channel {
    const fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }
}

/// Duty cycle of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duty {
    /// Percentage last entered or derived (0-100)
    pub percent: u8,
    /// Compare register value
    pub count: u16,
}

/// Register values for one complete timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSettings {
    pub prescaler: Prescaler,
    pub period: u16,
    pub duty_a: u16,
    pub duty_b: u16,
}

/// Frequency and duty state of the two outputs
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmChannelState {
    config: PwmConfig,
    frequency_hz: u16,
    prescaler: Prescaler,
    period: u16,
    duties: [Duty; 2],
}

impl PwmChannelState {
    /// Power-up state: default frequency, both channels at 0%
    pub fn new(config: PwmConfig) -> Self {
        let frequency_hz = config.default_frequency_hz.min(config.max_frequency_hz);
        let (prescaler, period) = select_band(config.clock_hz, frequency_hz);

        Self {
            config,
            frequency_hz,
            prescaler,
            period,
            duties: [Duty::default(); 2],
        }
    }

    /// Change the output frequency
    ///
    /// The frequency is clamped to the configured maximum. Each channel's
    /// percentage is then recomputed from its old compare count against the
    /// new period, and the new count is derived from that percentage.
    /// Returns the frequency actually applied.
    pub fn set_frequency(&mut self, hertz: u16) -> u16 {
        let hertz = hertz.min(self.config.max_frequency_hz);
        let (prescaler, period) = select_band(self.config.clock_hz, hertz);

        self.frequency_hz = hertz;
        self.prescaler = prescaler;
        self.period = period;

        for duty in &mut self.duties {
            let percent = count_to_percentage(period, duty.count);
            duty.percent = percent;
            duty.count = percentage_to_count(period, percent);
        }

        hertz
    }

    /// Set a channel's duty cycle, clamped to 0-100%
    ///
    /// Returns the compare count to program.
    pub fn set_duty(&mut self, channel: Channel, percent: u8) -> u16 {
        let percent = clamp_percent(percent);
        let count = percentage_to_count(self.period, percent);
        self.duties[channel.index()] = Duty { percent, count };
        count
    }

    /// Current output frequency in Hz
    pub fn frequency_hz(&self) -> u16 {
        self.frequency_hz
    }

    /// Selected divider band
    pub fn prescaler(&self) -> Prescaler {
        self.prescaler
    }

    /// Period register value
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Duty state of a channel
    pub fn duty(&self, channel: Channel) -> Duty {
        self.duties[channel.index()]
    }

    /// Register values for the timer
    pub fn settings(&self) -> TimerSettings {
        TimerSettings {
            prescaler: self.prescaler,
            period: self.period,
            duty_a: self.duties[0].count,
            duty_b: self.duties[1].count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PwmChannelState {
        PwmChannelState::new(PwmConfig::new())
    }

    #[test]
    fn test_power_up_state() {
        let pwm = state();
        assert_eq!(pwm.frequency_hz(), 100);
        assert_eq!(pwm.prescaler(), Prescaler::Div256);
        assert_eq!(pwm.period(), 464);
        assert_eq!(pwm.duty(Channel::A), Duty::default());
        assert_eq!(pwm.duty(Channel::B), Duty::default());
    }

    #[test]
    fn test_set_duty() {
        let mut pwm = state();
        assert_eq!(pwm.set_duty(Channel::A, 50), 232);
        assert_eq!(pwm.duty(Channel::A), Duty { percent: 50, count: 232 });
        assert_eq!(pwm.duty(Channel::B).count, 0);
    }

    #[test]
    fn test_set_duty_clamps() {
        let mut pwm = state();
        assert_eq!(pwm.set_duty(Channel::B, 250), 464);
        assert_eq!(pwm.duty(Channel::B).percent, 100);
    }

    #[test]
    fn test_set_frequency_clamps_to_config() {
        let config = PwmConfig {
            max_frequency_hz: 20_000,
            ..PwmConfig::new()
        };
        let mut pwm = PwmChannelState::new(config);
        assert_eq!(pwm.set_frequency(30_000), 20_000);
        assert_eq!(pwm.frequency_hz(), 20_000);
        assert_eq!(pwm.prescaler(), Prescaler::Div1);
    }

    #[test]
    fn test_frequency_change_rederives_from_old_count() {
        let mut pwm = state();
        pwm.set_duty(Channel::A, 50);

        pwm.set_frequency(1000);

        assert_eq!(pwm.period(), 1498);
        // 232 counts of 1498 is 15%, not the 50% that was entered
        assert_eq!(pwm.duty(Channel::A), Duty { percent: 15, count: 225 });
        assert_eq!(pwm.duty(Channel::B), Duty { percent: 0, count: 0 });
    }

    #[test]
    fn test_frequency_change_to_shorter_period_saturates() {
        let mut pwm = state();
        pwm.set_duty(Channel::A, 100);

        // 464 counts against a 183 period is over 100%
        pwm.set_frequency(65535);

        assert_eq!(pwm.period(), 183);
        assert_eq!(pwm.duty(Channel::A), Duty { percent: 100, count: 183 });
    }

    #[test]
    fn test_same_frequency_keeps_duty() {
        let mut pwm = state();
        pwm.set_duty(Channel::B, 30);
        pwm.set_frequency(100);
        assert_eq!(pwm.duty(Channel::B), Duty { percent: 30, count: 139 });
    }

    #[test]
    fn test_settings_snapshot() {
        let mut pwm = state();
        pwm.set_duty(Channel::A, 25);
        pwm.set_duty(Channel::B, 75);

        assert_eq!(
            pwm.settings(),
            TimerSettings {
                prescaler: Prescaler::Div256,
                period: 464,
                duty_a: 116,
                duty_b: 348,
            }
        );
    }
}
