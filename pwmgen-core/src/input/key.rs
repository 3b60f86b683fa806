//! Keypad keys and press edge detection

/// A key the panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// `0`-`9`
    Digit(u8),
    /// `*`: commit the field and move to the next one
    Next,
    /// `#`: commit the field and stay on it
    Enter,
}

impl Key {
    /// Map a keypad character; anything outside `0-9 * #` is `None`
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Key::Digit(ch as u8 - b'0')),
            '*' => Some(Key::Next),
            '#' => Some(Key::Enter),
            _ => None,
        }
    }
}

/// Turns raw keypad scans into key presses
///
/// A scan registers only when it differs from the last key seen. Empty
/// scans are ignored, so holding a key, and releasing and pressing the
/// same key again, both count once; a different key has to come between
/// two presses of the same key.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEdgeDetector {
    last: Option<char>,
}

impl KeyEdgeDetector {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Feed one scan result; returns the key if it is a new press
    pub fn register(&mut self, scanned: Option<char>) -> Option<char> {
        let key = scanned?;
        if self.last == Some(key) {
            return None;
        }
        self.last = Some(key);
        Some(key)
    }
}
