//! pwmgen - Keypad-driven two-channel PWM generator
//!
//! Firmware for STM32F072RB-based test fixture panels. The operator keys
//! in a frequency and two duty cycles, TIM3 drives both outputs, and a
//! 4x20 character LCD echoes the values in effect.
//!
//! Pin map:
//! - PA6 / PA7: PWM outputs A and B (TIM3_CH1 / TIM3_CH2)
//! - PA0-PA2: keypad columns (driven), PC0-PC3: keypad rows (pulled up)
//! - PB0-PB7: LCD D0-D7, PB8: RS, PB9: RW, PB10: E

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, OutputType, Pull, Speed};
use embassy_stm32::time::khz;
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use pwmgen_drivers::keypad::MatrixKeypad;
use pwmgen_drivers::lcd::{Hd44780, Hd44780Pins};
use pwmgen_hal_stm32f0::Tim3Pwm;

use crate::config::PANEL;

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("pwmgen firmware v{} starting...", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // PWM outputs. SimplePwm's frequency is overwritten by the first
    // timer configuration.
    let pwm = SimplePwm::new(
        p.TIM3,
        Some(PwmPin::new(p.PA6, OutputType::PushPull)),
        Some(PwmPin::new(p.PA7, OutputType::PushPull)),
        None,
        None,
        khz(1),
        CountingMode::EdgeAlignedUp,
    );
    let timer = Tim3Pwm::new(pwm);

    // Keypad matrix
    let columns = [
        Output::new(p.PA0, Level::High, Speed::Low),
        Output::new(p.PA1, Level::High, Speed::Low),
        Output::new(p.PA2, Level::High, Speed::Low),
    ];
    let rows = [
        Input::new(p.PC0, Pull::Up),
        Input::new(p.PC1, Pull::Up),
        Input::new(p.PC2, Pull::Up),
        Input::new(p.PC3, Pull::Up),
    ];
    let keypad = match MatrixKeypad::new(columns, rows, Delay, &PANEL.keypad) {
        Ok(keypad) => keypad,
        Err(e) => {
            error!("Keypad setup failed: {:?}", e);
            return;
        }
    };

    // Character LCD, write-only 8-bit bus
    let lcd_pins = Hd44780Pins {
        rs: Output::new(p.PB8, Level::Low, Speed::Medium),
        rw: Output::new(p.PB9, Level::Low, Speed::Medium),
        en: Output::new(p.PB10, Level::Low, Speed::Medium),
        data: [
            Output::new(p.PB0, Level::Low, Speed::Medium),
            Output::new(p.PB1, Level::Low, Speed::Medium),
            Output::new(p.PB2, Level::Low, Speed::Medium),
            Output::new(p.PB3, Level::Low, Speed::Medium),
            Output::new(p.PB4, Level::Low, Speed::Medium),
            Output::new(p.PB5, Level::Low, Speed::Medium),
            Output::new(p.PB6, Level::Low, Speed::Medium),
            Output::new(p.PB7, Level::Low, Speed::Medium),
        ],
    };
    let mut lcd = Hd44780::new(lcd_pins, Delay, &PANEL.display);
    if let Err(e) = lcd.init() {
        error!("Failed to initialize LCD: {:?}", e);
    } else {
        info!("LCD initialized");
    }

    info!(
        "Panel config: clock={}Hz, default={}Hz, poll={}ms",
        PANEL.pwm.clock_hz, PANEL.pwm.default_frequency_hz, PANEL.keypad.poll_interval_ms
    );

    spawner.spawn(tasks::panel_task(lcd, keypad, timer)).unwrap();

    info!("All tasks spawned");
}
