//! Numeric entry state machine
//!
//! Three entry fields are visited in a fixed cycle. Digits fill the active
//! field, `*` commits it and moves on, `#` commits it and stays.

use super::entry::NumericEntryField;
use super::key::Key;
use crate::config::MAX_FREQUENCY_HZ;
use crate::pwm::{Channel, MAX_PERCENT};

/// Entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Output frequency in Hz
    Frequency,
    /// Channel A duty cycle in percent
    DutyA,
    /// Channel B duty cycle in percent
    DutyB,
}

impl Field {
    /// Fields in visiting order
    pub const ALL: [Field; 3] = [Field::Frequency, Field::DutyA, Field::DutyB];

    /// Field visited after this one
    pub const fn next(self) -> Self {
        match self {
            Field::Frequency => Field::DutyA,
            Field::DutyA => Field::DutyB,
            Field::DutyB => Field::Frequency,
        }
    }

    /// Number of digits the field accepts
    pub const fn capacity(self) -> usize {
        match self {
            Field::Frequency => 5,
            Field::DutyA | Field::DutyB => 3,
        }
    }

    /// Largest value the field commits
    pub const fn max_value(self) -> u32 {
        match self {
            Field::Frequency => MAX_FREQUENCY_HZ as u32,
            Field::DutyA | Field::DutyB => MAX_PERCENT as u32,
        }
    }

    /// Screen position (row, column) of the field's first digit
    pub const fn position(self) -> (u8, u8) {
        match self {
            Field::Frequency => (1, 10),
            Field::DutyA => (2, 14),
            Field::DutyB => (3, 14),
        }
    }

    /// PWM channel a duty field controls
    pub const fn channel(self) -> Option<Channel> {
        match self {
            Field::Frequency => None,
            Field::DutyA => Some(Channel::A),
            Field::DutyB => Some(Channel::B),
        }
    }
}

/// Last committed value of every field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Committed {
    pub frequency_hz: u16,
    pub duty_a: u8,
    pub duty_b: u8,
}

/// What a key press asks the panel to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// A digit was stored in `field` at slot `index`
    Digit { field: Field, index: usize, digit: u8 },
    /// The active field was committed; apply all values and move to `next`
    Next { committed: Committed, next: Field },
    /// Only `field` was committed, with `value`; the active field is unchanged
    Enter { field: Field, value: u16 },
}

/// Keypad entry state: active field, digit buffers and committed values
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputStateMachine {
    active: Field,
    frequency: NumericEntryField,
    duty_a: NumericEntryField,
    duty_b: NumericEntryField,
    committed: Committed,
}

impl InputStateMachine {
    /// Start on the frequency field with zeroed buffers
    pub fn new(initial: Committed) -> Self {
        Self {
            active: Field::Frequency,
            frequency: NumericEntryField::new(Field::Frequency.capacity()),
            duty_a: NumericEntryField::new(Field::DutyA.capacity()),
            duty_b: NumericEntryField::new(Field::DutyB.capacity()),
            committed: initial,
        }
    }

    /// Process a key press
    pub fn handle_key(&mut self, key: Key) -> KeyAction {
        let field = self.active;

        match key {
            Key::Digit(digit) => {
                let index = self.entry_mut(field).push(digit);
                KeyAction::Digit {
                    field,
                    index,
                    digit,
                }
            }
            Key::Next => {
                self.commit(field);
                let next = field.next();
                self.entry_mut(next).reset_cursor();
                self.active = next;
                KeyAction::Next {
                    committed: self.committed,
                    next,
                }
            }
            Key::Enter => {
                let value = self.commit(field);
                KeyAction::Enter { field, value }
            }
        }
    }

    /// Field digits currently go into
    pub fn active_field(&self) -> Field {
        self.active
    }

    /// Last committed values
    pub fn committed(&self) -> Committed {
        self.committed
    }

    /// Digit buffer of a field
    pub fn entry(&self, field: Field) -> &NumericEntryField {
        match field {
            Field::Frequency => &self.frequency,
            Field::DutyA => &self.duty_a,
            Field::DutyB => &self.duty_b,
        }
    }

    fn entry_mut(&mut self, field: Field) -> &mut NumericEntryField {
        match field {
            Field::Frequency => &mut self.frequency,
            Field::DutyA => &mut self.duty_a,
            Field::DutyB => &mut self.duty_b,
        }
    }

    /// Parse a field's buffer into its committed value and rewind its cursor
    fn commit(&mut self, field: Field) -> u16 {
        let entry = self.entry_mut(field);
        let value = entry.value(field.max_value()) as u16;
        entry.reset_cursor();

        match field {
            Field::Frequency => self.committed.frequency_hz = value,
            Field::DutyA => self.committed.duty_a = value as u8,
            Field::DutyB => self.committed.duty_b = value as u8,
        }
        value
    }
}
