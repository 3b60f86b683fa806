//! Fixed-width decimal entry buffers

/// Widest entry field (frequency, 5 digits)
pub const MAX_DIGITS: usize = 5;

/// Parse a most-significant-first digit buffer, clamped to `max`
///
/// Slots that were never written hold 0, so they count as zero digits.
pub fn parse_decimal(digits: &[u8], max: u32) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &digit| {
            acc.saturating_mul(10).saturating_add(digit as u32)
        })
        .min(max)
}

/// Digit buffer with a write cursor
///
/// Digits are overwritten in place. Resetting the cursor does not clear the
/// buffer, so a shorter entry keeps the trailing digits of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NumericEntryField {
    digits: [u8; MAX_DIGITS],
    capacity: usize,
    cursor: usize,
}

impl NumericEntryField {
    /// Create a zero-filled field holding `capacity` digits (1 to [`MAX_DIGITS`])
    pub const fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            1
        } else if capacity > MAX_DIGITS {
            MAX_DIGITS
        } else {
            capacity
        };

        Self {
            digits: [0; MAX_DIGITS],
            capacity,
            cursor: 0,
        }
    }

    /// Write a digit at the cursor and advance it
    ///
    /// Once the field is full the cursor stays on the last slot and further
    /// digits overwrite it. Returns the slot that was written.
    pub fn push(&mut self, digit: u8) -> usize {
        let index = self.cursor;
        self.digits[index] = digit.min(9);
        self.cursor = (index + 1).min(self.capacity - 1);
        index
    }

    /// Move the cursor back to the first slot
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Parsed value, clamped to `max`
    pub fn value(&self, max: u32) -> u32 {
        parse_decimal(self.digits(), max)
    }

    /// Current buffer contents
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.capacity]
    }

    /// Slot the next digit goes into
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of digit slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(&[0, 0, 1, 0, 0], 65535), 100);
        assert_eq!(parse_decimal(&[0, 5, 0], 100), 50);
        assert_eq!(parse_decimal(&[], 100), 0);
        assert_eq!(parse_decimal(&[9, 9, 9, 9, 9], 65535), 65535);
        assert_eq!(parse_decimal(&[9, 9, 9], 100), 100);
    }

    #[test]
    fn test_new_field_is_zero() {
        let field = NumericEntryField::new(3);
        assert_eq!(field.digits(), &[0, 0, 0]);
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.value(100), 0);
    }

    #[test]
    fn test_capacity_clamped() {
        assert_eq!(NumericEntryField::new(0).capacity(), 1);
        assert_eq!(NumericEntryField::new(9).capacity(), MAX_DIGITS);
    }

    #[test]
    fn test_push_fills_in_order() {
        let mut field = NumericEntryField::new(3);
        assert_eq!(field.push(5), 0);
        assert_eq!(field.push(0), 1);
        assert_eq!(field.digits(), &[5, 0, 0]);
        assert_eq!(field.value(100), 100);
    }

    #[test]
    fn test_push_past_capacity_overwrites_last() {
        let mut field = NumericEntryField::new(3);
        for digit in [1, 2, 3, 4, 5] {
            field.push(digit);
        }
        assert_eq!(field.digits(), &[1, 2, 5]);
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_stale_digits_survive_reset() {
        let mut field = NumericEntryField::new(3);
        field.push(0);
        field.push(7);
        field.push(5);
        field.reset_cursor();

        field.push(1);
        // "1" typed, but "75" is still in the tail
        assert_eq!(field.digits(), &[1, 7, 5]);
        assert_eq!(field.value(1000), 175);
    }

    proptest! {
        #[test]
        fn cursor_stays_in_bounds(
            capacity in 1usize..=MAX_DIGITS,
            digits in proptest::collection::vec(0u8..=9, 0..64),
        ) {
            let mut field = NumericEntryField::new(capacity);
            for digit in digits {
                let index = field.push(digit);
                prop_assert!(index < capacity);
                prop_assert!(field.cursor() < capacity);
            }
        }

        #[test]
        fn parse_never_exceeds_max(
            digits in proptest::collection::vec(0u8..=9, 0..=MAX_DIGITS),
            max in any::<u16>(),
        ) {
            prop_assert!(parse_decimal(&digits, max as u32) <= max as u32);
        }
    }
}
