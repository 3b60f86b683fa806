//! Keypad reader trait

/// Trait for keypads that report the key held at the moment of the scan
pub trait KeypadReader {
    /// Scan the keypad once
    ///
    /// Returns the character of the pressed key, or `None` if nothing is
    /// pressed. With several keys held the first one found wins.
    fn scan(&mut self) -> Option<char>;
}
