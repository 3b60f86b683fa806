//! Panel controller
//!
//! Ties the keypad entry state machine to the PWM state, the timer and the
//! display. The firmware polls the keypad and hands every scan to
//! [`Controller::poll`]; everything after that happens here.
//!
//! Hardware is always written before the display echo, so a display failure
//! never leaves the timer out of step with the committed values.

use crate::config::PwmConfig;
use crate::input::{Committed, Field, InputStateMachine, Key, KeyAction, KeyEdgeDetector};
use crate::panel;
use crate::pwm::{Channel, PwmChannelState};
use crate::timer::TimerProtocol;
use crate::traits::{CharacterDisplay, DisplayError, PwmTimer};

/// Owns the panel state and its display and timer
pub struct Controller<D: CharacterDisplay, T: PwmTimer> {
    display: D,
    timer: TimerProtocol<T>,
    pwm: PwmChannelState,
    input: InputStateMachine,
    edges: KeyEdgeDetector,
}

impl<D: CharacterDisplay, T: PwmTimer> Controller<D, T> {
    /// Create a controller in the power-up state
    ///
    /// Nothing is written to the timer or display until [`start`](Self::start).
    pub fn new(config: PwmConfig, display: D, timer: T) -> Self {
        let pwm = PwmChannelState::new(config);
        let committed = Committed {
            frequency_hz: pwm.frequency_hz(),
            duty_a: pwm.duty(Channel::A).percent,
            duty_b: pwm.duty(Channel::B).percent,
        };

        Self {
            display,
            timer: TimerProtocol::new(timer),
            pwm,
            input: InputStateMachine::new(committed),
            edges: KeyEdgeDetector::new(),
        }
    }

    /// Program the timer with the power-up values and draw the entry screen
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.timer.initialize(&self.pwm.settings());
        panel::render_main(
            &mut self.display,
            self.pwm.frequency_hz(),
            self.pwm.duty(Channel::A).percent,
            self.pwm.duty(Channel::B).percent,
        )
    }

    /// Feed one keypad scan
    ///
    /// Scans that are not a new key press, and characters the panel does not
    /// use, return `Ok(None)`.
    pub fn poll(&mut self, scanned: Option<char>) -> Result<Option<KeyAction>, DisplayError> {
        let Some(ch) = self.edges.register(scanned) else {
            return Ok(None);
        };
        let Some(key) = Key::from_char(ch) else {
            return Ok(None);
        };
        self.handle_key(key).map(Some)
    }

    /// Process a key press, bypassing edge detection
    pub fn handle_key(&mut self, key: Key) -> Result<KeyAction, DisplayError> {
        let action = self.input.handle_key(key);

        match action {
            KeyAction::Digit { field, index, digit } => {
                let (row, col) = field.position();
                self.display
                    .print(row, col + index as u8, digit_str(digit))?;
                let cursor = self.input.entry(field).cursor();
                self.display.move_cursor(row, col + cursor as u8)?;
            }
            KeyAction::Next { committed, next } => {
                self.apply_all(committed);
                self.show_all()?;
                panel::focus(&mut self.display, next)?;
            }
            KeyAction::Enter { field, value } => {
                match field.channel() {
                    None => {
                        self.pwm.set_frequency(value);
                        self.timer.reconfigure(&self.pwm.settings());
                        self.show_all()?;
                    }
                    Some(channel) => {
                        let count = self.pwm.set_duty(channel, value as u8);
                        self.timer.update_duty(channel, count);
                        self.show_field(field)?;
                    }
                }
                panel::focus(&mut self.display, field)?;
            }
        }

        Ok(action)
    }

    /// Field digits currently go into
    pub fn active_field(&self) -> Field {
        self.input.active_field()
    }

    /// Output state as programmed into the timer
    pub fn pwm(&self) -> &PwmChannelState {
        &self.pwm
    }

    /// Entry state machine
    pub fn input(&self) -> &InputStateMachine {
        &self.input
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn timer(&self) -> &T {
        self.timer.timer()
    }

    /// Frequency first so duty counts are derived against the new period,
    /// then one register reload for all three values
    fn apply_all(&mut self, committed: Committed) {
        self.pwm.set_frequency(committed.frequency_hz);
        self.pwm.set_duty(Channel::A, committed.duty_a);
        self.pwm.set_duty(Channel::B, committed.duty_b);
        self.timer.reconfigure(&self.pwm.settings());
    }

    /// Echoes the values in effect, so after `*` the duties read back as
    /// committed rather than as re-derived for the new period
    fn show_all(&mut self) -> Result<(), DisplayError> {
        for field in Field::ALL {
            self.show_field(field)?;
        }
        Ok(())
    }

    fn show_field(&mut self, field: Field) -> Result<(), DisplayError> {
        let value = match field.channel() {
            None => self.pwm.frequency_hz() as u32,
            Some(channel) => self.pwm.duty(channel).percent as u32,
        };
        panel::show_value(&mut self.display, field, value)
    }
}

fn digit_str(digit: u8) -> &'static str {
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    DIGITS[digit.min(9) as usize]
}
