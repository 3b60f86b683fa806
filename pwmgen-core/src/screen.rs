//! In-memory character screen
//!
//! A 4x20 character grid implementing [`CharacterDisplay`]. Stands in for
//! the LCD in tests and shows exactly what the LCD would show.

use crate::config::{DISPLAY_COLUMNS, DISPLAY_ROWS};
use crate::traits::{CharacterDisplay, CursorMode, DisplayError};

/// Number of character rows
pub const SCREEN_ROWS: usize = DISPLAY_ROWS;

/// Number of character columns
pub const SCREEN_COLS: usize = DISPLAY_COLUMNS;

/// Character grid with cursor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    cursor: (u8, u8),
    cursor_mode: CursorMode,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            cursor: (0, 0),
            cursor_mode: CursorMode::Hidden,
        }
    }

    /// Text of a row, always [`SCREEN_COLS`] characters wide
    pub fn line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Text of a row with trailing blanks removed
    pub fn trimmed_line(&self, row: usize) -> Option<&str> {
        self.line(row).map(str::trim_end)
    }

    /// All rows, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        (0..SCREEN_ROWS).filter_map(move |row| self.line(row))
    }

    /// Current cursor position (row, column)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Current cursor appearance
    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    fn check(row: u8, col: u8) -> Result<(), DisplayError> {
        if (row as usize) < SCREEN_ROWS && (col as usize) < SCREEN_COLS {
            Ok(())
        } else {
            Err(DisplayError::InvalidCoordinates)
        }
    }
}

impl CharacterDisplay for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.cells = [[b' '; SCREEN_COLS]; SCREEN_ROWS];
        self.cursor = (0, 0);
        Ok(())
    }

    fn print(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        Self::check(row, col)?;

        let cells = &mut self.cells[row as usize];
        let mut end = col as usize;
        for ch in text.chars() {
            if end >= SCREEN_COLS {
                break;
            }
            // The LCD character ROM is ASCII
            cells[end] = if ch.is_ascii() { ch as u8 } else { b'?' };
            end += 1;
        }

        self.cursor = (row, end.min(SCREEN_COLS - 1) as u8);
        Ok(())
    }

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        Self::check(row, col)?;
        self.cursor = (row, col);
        Ok(())
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) -> Result<(), DisplayError> {
        self.cursor_mode = mode;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DisplayExt;

    #[test]
    fn test_new_screen_blank() {
        let screen = Screen::new();
        assert_eq!(screen.line(0), Some("                    "));
        assert_eq!(screen.trimmed_line(3), Some(""));
        assert_eq!(screen.line(4), None);
        assert_eq!(screen.lines().count(), SCREEN_ROWS);
    }

    #[test]
    fn test_print_overwrites_in_place() {
        let mut screen = Screen::new();
        screen.print(1, 0, "Frequency:00000Hz").unwrap();
        screen.print(1, 10, "123").unwrap();
        assert_eq!(screen.trimmed_line(1), Some("Frequency:12300Hz"));
        assert_eq!(screen.cursor(), (1, 13));
    }

    #[test]
    fn test_print_truncates_at_edge() {
        let mut screen = Screen::new();
        screen.print(0, 15, "0123456789").unwrap();
        assert_eq!(screen.line(0), Some("               01234"));
        assert_eq!(screen.trimmed_line(1), Some(""));
    }

    #[test]
    fn test_invalid_coordinates() {
        let mut screen = Screen::new();
        assert_eq!(screen.print(4, 0, "x"), Err(DisplayError::InvalidCoordinates));
        assert_eq!(screen.print(0, 20, "x"), Err(DisplayError::InvalidCoordinates));
        assert_eq!(screen.move_cursor(0, 20), Err(DisplayError::InvalidCoordinates));
    }

    #[test]
    fn test_clear_homes_cursor() {
        let mut screen = Screen::new();
        screen.print(2, 3, "abc").unwrap();
        screen.clear().unwrap();
        assert_eq!(screen.trimmed_line(2), Some(""));
        assert_eq!(screen.cursor(), (0, 0));
    }

    #[test]
    fn test_print_number_zero_pads() {
        let mut screen = Screen::new();
        screen.print_number(1, 10, 100, 5).unwrap();
        screen.print_number(2, 14, 7, 3).unwrap();
        screen.print(3, 0, "#").unwrap();
        assert_eq!(screen.trimmed_line(1), Some("          00100"));
        assert_eq!(screen.trimmed_line(2), Some("              007"));
        assert_eq!(screen.trimmed_line(3), Some("#"));
    }

    #[test]
    fn test_non_ascii_replaced() {
        let mut screen = Screen::new();
        screen.print(0, 0, "5°").unwrap();
        assert_eq!(screen.trimmed_line(0), Some("5?"));
    }
}
