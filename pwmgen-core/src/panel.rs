//! Fixed screen layouts
//!
//! The splash shown at power-up and the main entry screen. The digit slots
//! of the main screen line up with [`Field::position`].

use core::fmt::Write;

use heapless::String;

use crate::config::{DISPLAY_COLUMNS, DISPLAY_ROWS};
use crate::input::Field;
use crate::traits::{CharacterDisplay, CursorMode, DisplayError, DisplayExt};

/// How long the splash stays up before it is wiped
pub const SPLASH_HOLD_MS: u64 = 1000;

/// Order the splash rows are blanked in
pub const SPLASH_WIPE_ORDER: [u8; DISPLAY_ROWS] = [0, 3, 1, 2];

const BLANK_ROW: &str = "                    ";
const DASH_ROW: &str = "--------------------";

/// Main screen text with empty digit slots
pub const MAIN_SCREEN: [&str; DISPLAY_ROWS] = [
    "Fast: *=Next #=Enter",
    "Frequency:00000Hz",
    "Duty Cycle 1A:000%",
    "Duty Cycle 1B:000%",
];

/// Draw the power-up splash
pub fn render_splash<D: CharacterDisplay>(
    display: &mut D,
    version: &str,
) -> Result<(), DisplayError> {
    display.set_cursor_mode(CursorMode::Hidden)?;
    for row in 0..DISPLAY_ROWS as u8 {
        display.print(row, 0, DASH_ROW)?;
    }

    display.print(1, 5, "PWM 1")?;
    display.print(2, 8, "Generator")?;

    let mut line: String<DISPLAY_COLUMNS> = String::new();
    write!(line, "-Version {}-", version).map_err(|_| DisplayError::BufferOverflow)?;
    display.print(3, 4, &line)
}

/// Blank the splash row by row
pub fn clear_splash<D: CharacterDisplay>(display: &mut D) -> Result<(), DisplayError> {
    for row in SPLASH_WIPE_ORDER {
        display.print(row, 0, BLANK_ROW)?;
    }
    Ok(())
}

/// Draw the entry screen with the values in effect
///
/// Leaves a blinking cursor on the frequency field.
pub fn render_main<D: CharacterDisplay>(
    display: &mut D,
    frequency_hz: u16,
    duty_a: u8,
    duty_b: u8,
) -> Result<(), DisplayError> {
    display.clear()?;
    for (row, text) in MAIN_SCREEN.iter().enumerate() {
        display.print(row as u8, 0, text)?;
    }

    show_value(display, Field::Frequency, frequency_hz as u32)?;
    show_value(display, Field::DutyA, duty_a as u32)?;
    show_value(display, Field::DutyB, duty_b as u32)?;

    display.set_cursor_mode(CursorMode::Blinking)?;
    focus(display, Field::Frequency)
}

/// Echo a value into a field's digit slots, zero-padded to the field width
pub fn show_value<D: CharacterDisplay>(
    display: &mut D,
    field: Field,
    value: u32,
) -> Result<(), DisplayError> {
    let (row, col) = field.position();
    display.print_number(row, col, value, field.capacity())
}

/// Put the cursor on a field's first digit
pub fn focus<D: CharacterDisplay>(display: &mut D, field: Field) -> Result<(), DisplayError> {
    let (row, col) = field.position();
    display.move_cursor(row, col)
}
