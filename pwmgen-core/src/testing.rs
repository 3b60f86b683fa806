//! Test doubles shared by the unit tests

use heapless::Vec;

use crate::pwm::Prescaler;
use crate::traits::PwmTimer;

/// A single call made on a [`RecordingTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    ConfigureWaveform,
    Stop,
    Prescaler(Prescaler),
    Period(u16),
    DutyA(u16),
    DutyB(u16),
    Start,
}

/// PWM timer that logs every call
#[derive(Debug, Default)]
pub struct RecordingTimer {
    ops: Vec<TimerOp, 256>,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[TimerOp] {
        &self.ops
    }

    fn record(&mut self, op: TimerOp) {
        self.ops.push(op).expect("timer op log full");
    }
}

impl PwmTimer for RecordingTimer {
    fn configure_waveform(&mut self) {
        self.record(TimerOp::ConfigureWaveform);
    }

    fn stop(&mut self) {
        self.record(TimerOp::Stop);
    }

    fn set_prescaler(&mut self, prescaler: Prescaler) {
        self.record(TimerOp::Prescaler(prescaler));
    }

    fn set_period(&mut self, period: u16) {
        self.record(TimerOp::Period(period));
    }

    fn set_duty_a(&mut self, count: u16) {
        self.record(TimerOp::DutyA(count));
    }

    fn set_duty_b(&mut self, count: u16) {
        self.record(TimerOp::DutyB(count));
    }

    fn start(&mut self) {
        self.record(TimerOp::Start);
    }
}
