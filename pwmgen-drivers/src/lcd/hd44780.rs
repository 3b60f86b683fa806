//! HD44780-compatible character LCD, 8-bit parallel bus
//!
//! Write-only: RW is held low and the busy flag is never read, so every
//! command is followed by a fixed delay long enough for it to finish.
//!
//! Line start addresses come from [`DisplayConfig`]; the defaults match a
//! 4x20 CFAH2004 module, where row 2 continues row 0 in DDRAM.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use pwmgen_core::config::{DisplayConfig, DISPLAY_COLUMNS, DISPLAY_ROWS};
use pwmgen_core::traits::{CharacterDisplay, CursorMode, DisplayError};

/// Instruction set
mod cmd {
    pub const CLEAR: u8 = 0x01;
    /// Increment address, no display shift
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_OFF: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Display on with underline cursor and blinking block
    pub const DISPLAY_ON_BLINK: u8 = 0x0F;
    /// 8-bit interface, used alone during the reset sequence
    pub const FUNCTION_SET_8BIT: u8 = 0x30;
    /// 8-bit interface, two lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x38;
    pub const SET_DDRAM: u8 = 0x80;
}

const POWER_ON_DELAY_US: u32 = 50_000;
const RESET_FIRST_DELAY_US: u32 = 4_500;
const RESET_DELAY_US: u32 = 150;
const COMMAND_DELAY_US: u32 = 50;
const CLEAR_DELAY_US: u32 = 2_000;
const ENABLE_PULSE_US: u32 = 1;

/// Control and data pins
pub struct Hd44780Pins<P> {
    /// Register select: low for instructions, high for character data
    pub rs: P,
    /// Read/write, held low
    pub rw: P,
    /// Enable strobe
    pub en: P,
    /// D0-D7
    pub data: [P; 8],
}

/// HD44780 driver
pub struct Hd44780<P, D> {
    pins: Hd44780Pins<P>,
    delay: D,
    line_addresses: [u8; DISPLAY_ROWS],
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create the driver; call [`init`](Self::init) before anything else
    pub fn new(pins: Hd44780Pins<P>, delay: D, config: &DisplayConfig) -> Self {
        Self {
            pins,
            delay,
            line_addresses: config.line_addresses,
        }
    }

    /// Reset by instruction and set up the display
    ///
    /// Leaves the display on, cleared, with the cursor hidden.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.pins.rw.set_low().map_err(|_| DisplayError::Communication)?;
        self.pins.en.set_low().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(POWER_ON_DELAY_US);

        self.command(cmd::FUNCTION_SET_8BIT, RESET_FIRST_DELAY_US)?;
        self.command(cmd::FUNCTION_SET_8BIT, RESET_DELAY_US)?;
        self.command(cmd::FUNCTION_SET_8BIT, COMMAND_DELAY_US)?;

        self.command(cmd::FUNCTION_SET, COMMAND_DELAY_US)?;
        self.command(cmd::DISPLAY_OFF, COMMAND_DELAY_US)?;
        self.command(cmd::CLEAR, CLEAR_DELAY_US)?;
        self.command(cmd::ENTRY_MODE_INCREMENT, COMMAND_DELAY_US)?;
        self.command(cmd::DISPLAY_ON, COMMAND_DELAY_US)
    }

    fn set_address(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row as usize >= DISPLAY_ROWS || col as usize >= DISPLAY_COLUMNS {
            return Err(DisplayError::InvalidCoordinates);
        }
        let address = self.line_addresses[row as usize].wrapping_add(col) & 0x7F;
        self.command(cmd::SET_DDRAM | address, COMMAND_DELAY_US)
    }

    fn command(&mut self, byte: u8, settle_us: u32) -> Result<(), DisplayError> {
        self.pins.rs.set_low().map_err(|_| DisplayError::Communication)?;
        self.write_byte(byte)?;
        self.delay.delay_us(settle_us);
        Ok(())
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.pins.rs.set_high().map_err(|_| DisplayError::Communication)?;
        self.write_byte(byte)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    /// Put a byte on D0-D7 and latch it with a pulse on E
    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.pins.data.iter_mut().enumerate() {
            let result = if byte & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            result.map_err(|_| DisplayError::Communication)?;
        }

        self.pins.en.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        self.pins.en.set_low().map_err(|_| DisplayError::Communication)
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR, CLEAR_DELAY_US)
    }

    fn print(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.set_address(row, col)?;

        // DDRAM runs on into another row past the last column
        let room = DISPLAY_COLUMNS - col as usize;
        for ch in text.chars().take(room) {
            self.data(if ch.is_ascii() { ch as u8 } else { b'?' })?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.set_address(row, col)
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) -> Result<(), DisplayError> {
        let control = match mode {
            CursorMode::Hidden => cmd::DISPLAY_ON,
            CursorMode::Blinking => cmd::DISPLAY_ON_BLINK,
        };
        self.command(control, COMMAND_DELAY_US)
    }
}
