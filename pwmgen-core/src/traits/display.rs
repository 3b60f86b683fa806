//! Character display trait for the 4x20 panel LCD

use core::fmt::Write;

use heapless::String;

/// Errors that can occur while writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin write failed
    Communication,
    /// Row or column outside the display
    InvalidCoordinates,
    /// Formatted text did not fit the scratch buffer
    BufferOverflow,
}

/// Cursor appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorMode {
    /// No cursor shown
    #[default]
    Hidden,
    /// Blinking block at the cursor position
    Blinking,
}

/// Trait for character displays
///
/// Rows and columns are 0-based. Text that runs past the last column is
/// cut off, it does not wrap to the next row.
pub trait CharacterDisplay {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Print text starting at a position
    ///
    /// The cursor is left after the last character written.
    fn print(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Move the cursor without writing
    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Show, hide or blink the cursor
    fn set_cursor_mode(&mut self, mode: CursorMode) -> Result<(), DisplayError>;
}

/// Helper trait for printing numbers
pub trait DisplayExt: CharacterDisplay {
    /// Print a number zero-padded to `width` digits
    fn print_number(
        &mut self,
        row: u8,
        col: u8,
        value: u32,
        width: usize,
    ) -> Result<(), DisplayError> {
        let mut text: String<10> = String::new();
        write!(text, "{:0width$}", value, width = width)
            .map_err(|_| DisplayError::BufferOverflow)?;
        self.print(row, col, &text)
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}
