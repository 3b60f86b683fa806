//! Matrix keypad scanner
//!
//! Columns are driven low one at a time while the pulled-up rows are
//! sampled. A row reading low means the key at (row, column) is down.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use pwmgen_core::config::{KeypadConfig, KEYPAD_COLUMNS, KEYPAD_ROWS};
use pwmgen_core::traits::KeypadReader;

/// Keypad scan errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Driving a column pin failed
    Column,
    /// Reading a row pin failed
    Row,
}

/// 4x3 matrix keypad on GPIO pins
pub struct MatrixKeypad<C, R, D> {
    columns: [C; KEYPAD_COLUMNS],
    rows: [R; KEYPAD_ROWS],
    delay: D,
    layout: [[char; KEYPAD_COLUMNS]; KEYPAD_ROWS],
    settle_us: u32,
}

impl<C, R, D> MatrixKeypad<C, R, D>
where
    C: OutputPin,
    R: InputPin,
    D: DelayNs,
{
    /// Create a scanner; all columns are released (driven high)
    pub fn new(
        columns: [C; KEYPAD_COLUMNS],
        rows: [R; KEYPAD_ROWS],
        delay: D,
        config: &KeypadConfig,
    ) -> Result<Self, KeypadError> {
        let mut keypad = Self {
            columns,
            rows,
            delay,
            layout: config.layout,
            settle_us: config.settle_us,
        };
        keypad.release_all()?;
        Ok(keypad)
    }

    /// Scan every column once
    ///
    /// Returns the first key found down, in row-major order within the
    /// first active column.
    pub fn try_scan(&mut self) -> Result<Option<char>, KeypadError> {
        for col in 0..KEYPAD_COLUMNS {
            self.columns[col].set_low().map_err(|_| KeypadError::Column)?;
            self.delay.delay_us(self.settle_us);

            let found = self.read_rows(col);

            self.columns[col].set_high().map_err(|_| KeypadError::Column)?;

            if let Some(key) = found? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn read_rows(&mut self, col: usize) -> Result<Option<char>, KeypadError> {
        for (row, pin) in self.rows.iter_mut().enumerate() {
            if pin.is_low().map_err(|_| KeypadError::Row)? {
                return Ok(Some(self.layout[row][col]));
            }
        }
        Ok(None)
    }

    fn release_all(&mut self) -> Result<(), KeypadError> {
        for pin in &mut self.columns {
            pin.set_high().map_err(|_| KeypadError::Column)?;
        }
        Ok(())
    }
}

impl<C, R, D> KeypadReader for MatrixKeypad<C, R, D>
where
    C: OutputPin,
    R: InputPin,
    D: DelayNs,
{
    /// A failed scan reads as no key
    fn scan(&mut self) -> Option<char> {
        match self.try_scan() {
            Ok(key) => key,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Keypad scan failed: {:?}", _e);
                None
            }
        }
    }
}
