//! Configuration type definitions
//!
//! The panel configuration is fixed at build time. The firmware build
//! script reads `panel.toml`, validates it with [`PanelConfig::validate`]
//! and bakes the result into the binary as a `const`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timer clock of the 12 MHz reference board
pub const DEFAULT_CLOCK_HZ: u32 = 12_000_000;

/// Highest frequency the operator can request
pub const MAX_FREQUENCY_HZ: u16 = 65_535;

/// Frequency the outputs run at after power-up
pub const DEFAULT_FREQUENCY_HZ: u16 = 100;

/// Keypad poll interval in ms (also the debounce delay)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Time a keypad column is held low before the rows are sampled, in us
pub const DEFAULT_SETTLE_US: u32 = 10;

/// Keypad matrix rows
pub const KEYPAD_ROWS: usize = 4;

/// Keypad matrix columns
pub const KEYPAD_COLUMNS: usize = 3;

/// Character display rows
pub const DISPLAY_ROWS: usize = 4;

/// Character display columns
pub const DISPLAY_COLUMNS: usize = 20;

/// Highest valid DDRAM address on an HD44780 controller
pub const MAX_DDRAM_ADDRESS: u8 = 0x67;

/// Standard 3x4 telephone keypad layout
pub const DEFAULT_KEYPAD_LAYOUT: [[char; KEYPAD_COLUMNS]; KEYPAD_ROWS] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

/// DDRAM start address of each line on a CFAH2004 (4x20) module
pub const CFAH2004_LINE_ADDRESSES: [u8; DISPLAY_ROWS] = [0x00, 0x40, 0x14, 0x54];

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Timer clock frequency is zero
    ZeroClock,
    /// Maximum frequency is zero
    ZeroMaxFrequency,
    /// Power-up frequency exceeds the maximum frequency
    DefaultAboveMaximum,
    /// Poll interval outside 1-1000 ms
    PollIntervalOutOfRange,
    /// A required key is missing from the keypad layout
    MissingKey(char),
    /// A key appears more than once in the keypad layout
    DuplicateKey(char),
    /// The keypad layout contains a key the panel does not understand
    UnknownKey(char),
    /// A display line address is beyond the controller's DDRAM
    LineAddressOutOfRange(u8),
}

/// PWM timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PwmConfig {
    /// Clock feeding the timer prescaler, in Hz
    pub clock_hz: u32,
    /// Frequency requests above this are clamped
    pub max_frequency_hz: u16,
    /// Frequency applied at power-up
    pub default_frequency_hz: u16,
}

impl PwmConfig {
    /// Configuration of the 12 MHz reference board
    pub const fn new() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            max_frequency_hz: MAX_FREQUENCY_HZ,
            default_frequency_hz: DEFAULT_FREQUENCY_HZ,
        }
    }

}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Keypad matrix configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeypadConfig {
    /// Character produced by each (row, column) position
    pub layout: [[char; KEYPAD_COLUMNS]; KEYPAD_ROWS],
    /// Delay between two scans
    pub poll_interval_ms: u32,
    /// Column settle time before sampling rows
    pub settle_us: u32,
}

impl KeypadConfig {
    /// Standard layout with a 100 ms debounce
    pub const fn new() -> Self {
        Self {
            layout: DEFAULT_KEYPAD_LAYOUT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_us: DEFAULT_SETTLE_US,
        }
    }
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Character display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// DDRAM address of column 0 on each row
    pub line_addresses: [u8; DISPLAY_ROWS],
}

impl DisplayConfig {
    /// CFAH2004 line layout
    pub const fn new() -> Self {
        Self {
            line_addresses: CFAH2004_LINE_ADDRESSES,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    pub pwm: PwmConfig,
    pub keypad: KeypadConfig,
    pub display: DisplayConfig,
}

impl PanelConfig {
    /// Defaults matching the reference board
    pub const fn new() -> Self {
        Self {
            pwm: PwmConfig::new(),
            keypad: KeypadConfig::new(),
            display: DisplayConfig::new(),
        }
    }

    /// Check the configuration for values the panel cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pwm.clock_hz == 0 {
            return Err(ConfigError::ZeroClock);
        }
        if self.pwm.max_frequency_hz == 0 {
            return Err(ConfigError::ZeroMaxFrequency);
        }
        if self.pwm.default_frequency_hz > self.pwm.max_frequency_hz {
            return Err(ConfigError::DefaultAboveMaximum);
        }
        if !(1..=1000).contains(&self.keypad.poll_interval_ms) {
            return Err(ConfigError::PollIntervalOutOfRange);
        }

        validate_layout(&self.keypad.layout)?;

        if let Some(&addr) = self
            .display
            .line_addresses
            .iter()
            .find(|&&addr| addr as usize + DISPLAY_COLUMNS - 1 > MAX_DDRAM_ADDRESS as usize)
        {
            return Err(ConfigError::LineAddressOutOfRange(addr));
        }

        Ok(())
    }
}

/// Every key in `0-9 * #` must appear exactly once
fn validate_layout(layout: &[[char; KEYPAD_COLUMNS]; KEYPAD_ROWS]) -> Result<(), ConfigError> {
    // Bits 0-9 for digits, 10 for '*', 11 for '#'
    let mut seen: u16 = 0;

    for &key in layout.iter().flatten() {
        let bit = match key {
            '0'..='9' => key as u16 - '0' as u16,
            '*' => 10,
            '#' => 11,
            other => return Err(ConfigError::UnknownKey(other)),
        };
        if seen & (1 << bit) != 0 {
            return Err(ConfigError::DuplicateKey(key));
        }
        seen |= 1 << bit;
    }

    for (bit, key) in "0123456789*#".chars().enumerate() {
        if seen & (1 << bit) == 0 {
            return Err(ConfigError::MissingKey(key));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(PanelConfig::new().validate(), Ok(()));
        assert_eq!(PanelConfig::default(), PanelConfig::new());
    }

    #[test]
    fn test_zero_clock_rejected() {
        let mut config = PanelConfig::new();
        config.pwm.clock_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroClock));
    }

    #[test]
    fn test_default_frequency_above_max() {
        let mut config = PanelConfig::new();
        config.pwm.max_frequency_hz = 50;
        assert_eq!(config.validate(), Err(ConfigError::DefaultAboveMaximum));
    }

    #[test]
    fn test_poll_interval_range() {
        let mut config = PanelConfig::new();
        config.keypad.poll_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::PollIntervalOutOfRange));

        config.keypad.poll_interval_ms = 1001;
        assert_eq!(config.validate(), Err(ConfigError::PollIntervalOutOfRange));
    }

    #[test]
    fn test_layout_duplicate_key() {
        let mut config = PanelConfig::new();
        config.keypad.layout[3][1] = '1';
        assert_eq!(config.validate(), Err(ConfigError::DuplicateKey('1')));
    }

    #[test]
    fn test_layout_unknown_key() {
        let mut config = PanelConfig::new();
        config.keypad.layout[3][2] = 'A';
        assert_eq!(config.validate(), Err(ConfigError::UnknownKey('A')));
    }

    #[test]
    fn test_line_address_out_of_range() {
        let mut config = PanelConfig::new();
        config.display.line_addresses[3] = 0x60;
        assert_eq!(
            config.validate(),
            Err(ConfigError::LineAddressOutOfRange(0x60))
        );
    }
}
