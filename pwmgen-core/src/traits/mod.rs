//! Hardware abstraction traits
//!
//! These traits define the interface between the panel logic and the
//! board-specific keypad, display and timer implementations.

pub mod display;
pub mod keypad;
pub mod pwm;

pub use display::{CharacterDisplay, CursorMode, DisplayError, DisplayExt};
pub use keypad::KeypadReader;
pub use pwm::PwmTimer;
