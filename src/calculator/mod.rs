//! Calculator engine.
//!
//! This module provides:
//! - The keypad vocabulary (`Key` and its operators)
//! - The state machine that turns keys into a display string
//! - Arithmetic and display formatting
//! - Copying the display to the clipboard

mod clipboard;
mod engine;
mod evaluation;
mod key;

pub use clipboard::copy_to_clipboard;
pub use engine::{CalcState, apply};
pub use evaluation::{ERROR_SENTINEL, MAX_FRACTION_DIGITS, format_number, parse_display};
pub use key::{AngleMode, BinaryOp, Digit, Key, UnaryOp};
