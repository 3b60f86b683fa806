//! Clock divider band selection
//!
//! The timer counter is 16 bits wide, so low frequencies need a coarser
//! clock divider to fit their period into the counter. The band is picked
//! from a fixed ladder, highest threshold first.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timer clock divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prescaler {
    Div1,
    Div8,
    Div64,
    #[default]
    Div256,
    Div1024,
}

impl Prescaler {
    /// All dividers, finest first
    pub const ALL: [Prescaler; 5] = [
        Prescaler::Div1,
        Prescaler::Div8,
        Prescaler::Div64,
        Prescaler::Div256,
        Prescaler::Div1024,
    ];

    /// Clock division factor
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Div1 => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }

    /// Divider band for a frequency
    pub const fn for_frequency(hertz: u16) -> Self {
        match hertz {
            5000..=u16::MAX => Prescaler::Div1,
            1000..=4999 => Prescaler::Div8,
            200..=999 => Prescaler::Div64,
            50..=199 => Prescaler::Div256,
            _ => Prescaler::Div1024,
        }
    }
}

/// Period register value for a frequency at a given divider
///
/// `clock / (divisor * (1 + hertz))`, truncated and saturated to 16 bits.
pub fn period_for(clock_hz: u32, prescaler: Prescaler, hertz: u16) -> u16 {
    let ticks = prescaler.divisor() * (1 + hertz as u32);
    let period = clock_hz / ticks;
    period.min(u16::MAX as u32) as u16
}

/// Pick the divider band and period register value for a frequency
pub fn select_band(clock_hz: u32, hertz: u16) -> (Prescaler, u16) {
    let prescaler = Prescaler::for_frequency(hertz);
    (prescaler, period_for(clock_hz, prescaler, hertz))
}
