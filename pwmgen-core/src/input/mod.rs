//! Keypad input handling
//!
//! Raw scans go through the edge detector, registered keys drive the entry
//! state machine, and the state machine reports what the panel should do.

pub mod entry;
pub mod key;
pub mod machine;

pub use entry::{parse_decimal, NumericEntryField, MAX_DIGITS};
pub use key::{Key, KeyEdgeDetector};
pub use machine::{Committed, Field, InputStateMachine, KeyAction};
