//! Panel control task
//!
//! Shows the splash, then polls the keypad forever and hands every scan to
//! the controller. All timer writes happen inside `Controller::poll`, so
//! nothing else in the firmware touches TIM3 once this task runs.

use defmt::*;
use embassy_stm32::gpio::{Input, Output};
use embassy_time::{Delay, Timer};

use pwmgen_core::panel::{self, SPLASH_HOLD_MS};
use pwmgen_core::pwm::Channel;
use pwmgen_core::traits::KeypadReader;
use pwmgen_core::Controller;
use pwmgen_drivers::keypad::MatrixKeypad;
use pwmgen_drivers::lcd::Hd44780;
use pwmgen_hal_stm32f0::Tim3Pwm;

use crate::config::PANEL;

pub type PanelLcd = Hd44780<Output<'static>, Delay>;
pub type PanelKeypad = MatrixKeypad<Output<'static>, Input<'static>, Delay>;

#[embassy_executor::task]
pub async fn panel_task(mut lcd: PanelLcd, mut keypad: PanelKeypad, timer: Tim3Pwm<'static>) {
    info!("Panel task started");

    if let Err(e) = panel::render_splash(&mut lcd, env!("CARGO_PKG_VERSION")) {
        warn!("Splash failed: {:?}", e);
    }
    Timer::after_millis(SPLASH_HOLD_MS).await;
    if let Err(e) = panel::clear_splash(&mut lcd) {
        warn!("Splash wipe failed: {:?}", e);
    }

    let mut controller = Controller::new(PANEL.pwm, lcd, timer);
    if let Err(e) = controller.start() {
        warn!("Main screen failed: {:?}", e);
    }
    info!(
        "Output running: {}Hz, prescaler /{}, period {}",
        controller.pwm().frequency_hz(),
        controller.pwm().prescaler().divisor(),
        controller.pwm().period()
    );

    let poll_ms = PANEL.keypad.poll_interval_ms as u64;

    loop {
        match controller.poll(keypad.scan()) {
            Ok(Some(action)) => {
                debug!("Key: {:?}", action);
                let pwm = controller.pwm();
                trace!(
                    "{}Hz /{} period={} A={}% ({}) B={}% ({})",
                    pwm.frequency_hz(),
                    pwm.prescaler().divisor(),
                    pwm.period(),
                    pwm.duty(Channel::A).percent,
                    pwm.duty(Channel::A).count,
                    pwm.duty(Channel::B).percent,
                    pwm.duty(Channel::B).count
                );
            }
            Ok(None) => {}
            // The timer is already written; only the echo was lost
            Err(e) => warn!("Display write failed: {:?}", e),
        }

        Timer::after_millis(poll_ms).await;
    }
}
