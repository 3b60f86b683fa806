//! STM32F0-specific HAL for the pwmgen firmware
//!
//! Implements the `pwmgen-core` timer trait on STM32F0 peripherals:
//!
//! - STM32F072RB: TIM3 channels 1 and 2 as PWM outputs A and B
//!
//! # Features
//!
//! - `stm32f072rb` - Enable support for STM32F072RB
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod timer;

pub use timer::Tim3Pwm;
