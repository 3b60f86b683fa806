//! Two-channel PWM on TIM3
//!
//! Channel A is TIM3_CH1, channel B is TIM3_CH2. `SimplePwm` owns the pins
//! and sets both channels to PWM mode 1; the prescaler, auto-reload and
//! compare registers are then written directly so the divider band and
//! period computed by the panel land in the timer unchanged.

use embassy_stm32::pac;
use embassy_stm32::peripherals::TIM3;
use embassy_stm32::timer::simple_pwm::SimplePwm;

use pwmgen_core::pwm::Prescaler;
use pwmgen_core::traits::PwmTimer;

/// TIM3 driven through [`PwmTimer`]
pub struct Tim3Pwm<'d> {
    pwm: SimplePwm<'d, TIM3>,
    /// Divider selected by the last `set_prescaler`, applied on `start`
    divisor: u32,
}

impl<'d> Tim3Pwm<'d> {
    pub fn new(pwm: SimplePwm<'d, TIM3>) -> Self {
        Self {
            pwm,
            divisor: Prescaler::default().divisor(),
        }
    }

    fn regs(&self) -> pac::timer::TimGp16 {
        pac::TIM3
    }
}

impl PwmTimer for Tim3Pwm<'_> {
    fn configure_waveform(&mut self) {
        // ARR preloaded: a new period applies from the next update event
        self.regs().cr1().modify(|w| w.set_arpe(true));
        self.pwm.ch1().enable();
        self.pwm.ch2().enable();
    }

    fn stop(&mut self) {
        self.regs().cr1().modify(|w| w.set_cen(false));
    }

    fn set_prescaler(&mut self, prescaler: Prescaler) {
        self.divisor = prescaler.divisor();
        self.regs().psc().write_value((self.divisor - 1) as u16);
    }

    fn set_period(&mut self, period: u16) {
        self.regs().arr().write(|w| w.set_arr(period));
    }

    fn set_duty_a(&mut self, count: u16) {
        self.regs().ccr(0).write(|w| w.set_ccr(count));
    }

    fn set_duty_b(&mut self, count: u16) {
        self.regs().ccr(1).write(|w| w.set_ccr(count));
    }

    fn start(&mut self) {
        let regs = self.regs();
        // Load PSC/ARR/CCR shadows and restart the count from zero
        regs.cnt().write(|w| w.set_cnt(0));
        regs.egr().write(|w| w.set_ug(true));
        regs.cr1().modify(|w| w.set_cen(true));

        #[cfg(feature = "defmt")]
        defmt::trace!("TIM3 running, /{}", self.divisor);
    }
}
