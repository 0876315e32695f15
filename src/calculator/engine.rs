//! The calculator state machine.
//!
//! [`CalcState`] holds everything the keypad can change. Each key is handled
//! to completion by [`CalcState::press`]; [`apply`] is the pure form.

use serde::Serialize;

use super::evaluation::{
    ERROR_SENTINEL, evaluate_binary, evaluate_unary, format_number, parse_display,
};
use super::key::{AngleMode, BinaryOp, Digit, Key, UnaryOp};
use crate::error::DomainError;

/// Engine state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalcState {
    display: String,
    pending_operation: Option<BinaryOp>,
    pending_operand: Option<f64>,
    replace_on_next_digit: bool,
    angle_mode: AngleMode,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::with_angle_mode(AngleMode::default())
    }
}

/// Apply a key to a state, returning the new state.
pub fn apply(key: Key, state: &CalcState) -> CalcState {
    state.apply(key)
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with the given angle mode.
    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self {
            display: "0".to_string(),
            pending_operation: None,
            pending_operand: None,
            replace_on_next_digit: true,
            angle_mode,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operation(&self) -> Option<BinaryOp> {
        self.pending_operation
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn replace_on_next_digit(&self) -> bool {
        self.replace_on_next_digit
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Whether the display currently shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// Return the state that results from pressing `key`.
    pub fn apply(&self, key: Key) -> Self {
        let mut next = self.clone();
        next.press(key);
        next
    }

    /// Handle a key in place.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.append_digit(d),
            Key::Decimal => self.append_decimal(),
            Key::Clear => self.clear(),
            Key::Negate => self.negate(),
            Key::Binary(op) => self.set_binary_operation(op),
            Key::Unary(op) => self.apply_unary(op),
            Key::ToggleAngleMode => self.angle_mode = self.angle_mode.toggled(),
            Key::Equals => self.equals(),
        }

        tracing::debug!(%key, display = %self.display, "key handled");
    }

    fn append_digit(&mut self, digit: Digit) {
        if self.replace_on_next_digit || self.display == "0" {
            self.display = digit.as_char().to_string();
            self.replace_on_next_digit = false;
        } else {
            let mut next = self.display.clone();
            next.push(digit.as_char());
            if parse_display(&next).is_none() {
                tracing::debug!(len = self.display.len(), "entry too long, digit ignored");
                return;
            }
            self.display = next;
        }
    }

    fn append_decimal(&mut self) {
        if self.replace_on_next_digit {
            self.display = "0.".to_string();
            self.replace_on_next_digit = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn clear(&mut self) {
        *self = Self::with_angle_mode(self.angle_mode);
    }

    fn negate(&mut self) {
        let Some(value) = parse_display(&self.display) else {
            return;
        };
        self.show(format_number(-value));
    }

    fn set_binary_operation(&mut self, op: BinaryOp) {
        let Some(value) = parse_display(&self.display) else {
            return;
        };
        self.pending_operand = Some(value);
        self.pending_operation = Some(op);
        self.replace_on_next_digit = true;
    }

    fn apply_unary(&mut self, op: UnaryOp) {
        let value = if op.is_constant() {
            0.0
        } else {
            match parse_display(&self.display) {
                Some(value) => value,
                None => return,
            }
        };

        let result = evaluate_unary(op, value, self.angle_mode).and_then(format_number);
        if self.show(result) {
            self.replace_on_next_digit = true;
        }
    }

    fn equals(&mut self) {
        let (Some(op), Some(left), Some(right)) = (
            self.pending_operation,
            self.pending_operand,
            parse_display(&self.display),
        ) else {
            return;
        };

        let result = evaluate_binary(op, left, right).and_then(format_number);
        if self.show(result) {
            self.pending_operation = None;
            self.replace_on_next_digit = true;
        }
    }

    /// Put a formatted result on the display, or enter the error state.
    ///
    /// Returns `true` when the result was shown.
    fn show(&mut self, result: Result<String, DomainError>) -> bool {
        match result {
            Ok(text) => {
                self.display = text;
                true
            }
            Err(err) => {
                self.enter_error(err);
                false
            }
        }
    }

    fn enter_error(&mut self, err: DomainError) {
        tracing::debug!(error = %err, "domain error");
        self.display = ERROR_SENTINEL.to_string();
        self.pending_operation = None;
        self.pending_operand = None;
        self.replace_on_next_digit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Key {
        Key::Digit(Digit::new(d).unwrap())
    }

    fn run(state: CalcState, keys: &[Key]) -> CalcState {
        keys.iter().fold(state, |s, &k| apply(k, &s))
    }

    fn press(keys: &[Key]) -> CalcState {
        run(CalcState::new(), keys)
    }

    #[test]
    fn test_initial_state() {
        let state = CalcState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending_operation(), None);
        assert_eq!(state.pending_operand(), None);
        assert!(state.replace_on_next_digit());
        assert_eq!(state.angle_mode(), AngleMode::Radians);
    }

    #[test]
    fn test_digits_concatenate() {
        let state = press(&[digit(1), digit(2), digit(0), digit(7)]);
        assert_eq!(state.display(), "1207");
        assert!(!state.replace_on_next_digit());
    }

    #[test]
    fn test_long_entry_stays_finite() {
        let nine = vec![digit(9); 320];
        let state = press(&nine);
        assert!(state.display().len() < 320);
        assert!(parse_display(state.display()).is_some());

        let state = apply(Key::Binary(BinaryOp::Add), &state);
        assert_eq!(state.pending_operation(), Some(BinaryOp::Add));
    }

    #[test]
    fn test_leading_zero_suppressed() {
        assert_eq!(press(&[digit(0), digit(0), digit(5)]).display(), "5");
        assert_eq!(press(&[digit(0), digit(0)]).display(), "0");
    }

    #[test]
    fn test_decimal_once_per_number() {
        let state = press(&[digit(1), Key::Decimal, digit(5), Key::Decimal, digit(2)]);
        assert_eq!(state.display(), "1.52");
    }

    #[test]
    fn test_decimal_starts_new_number() {
        assert_eq!(press(&[Key::Decimal, digit(5)]).display(), "0.5");
        assert_eq!(press(&[Key::Decimal, digit(0), digit(5)]).display(), "0.05");

        let state = press(&[digit(3), Key::Binary(BinaryOp::Add), Key::Decimal, digit(5)]);
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_addition() {
        let state = press(&[digit(1), Key::Binary(BinaryOp::Add), digit(2), Key::Equals]);
        assert_eq!(state.display(), "3");
        assert_eq!(state.pending_operation(), None);
        assert!(state.replace_on_next_digit());
    }

    #[test]
    fn test_division_by_zero() {
        let state = press(&[digit(1), Key::Binary(BinaryOp::Divide), digit(0), Key::Equals]);
        assert_eq!(state.display(), ERROR_SENTINEL);
        assert!(state.is_error());
        assert_eq!(state.pending_operation(), None);
        assert_eq!(state.pending_operand(), None);
        assert!(state.replace_on_next_digit());
    }

    #[test]
    fn test_square_root_of_negative() {
        let state = press(&[digit(1), Key::Negate, Key::Unary(UnaryOp::SquareRoot)]);
        assert_eq!(state.display(), ERROR_SENTINEL);
    }

    #[test]
    fn test_square_is_immediate() {
        let state = press(&[digit(3), Key::Unary(UnaryOp::Square)]);
        assert_eq!(state.display(), "9");
        assert!(state.replace_on_next_digit());
    }

    #[test]
    fn test_unary_keeps_pending_operation() {
        let state = press(&[
            digit(2),
            Key::Binary(BinaryOp::Multiply),
            digit(9),
            Key::Unary(UnaryOp::SquareRoot),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "6");
    }

    #[test]
    fn test_second_equals_is_noop() {
        let once = press(&[digit(4), Key::Binary(BinaryOp::Subtract), digit(6), Key::Equals]);
        assert_eq!(once.display(), "-2");
        let twice = apply(Key::Equals, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let state = press(&[digit(4), digit(2)]);
        assert_eq!(apply(Key::Equals, &state), state);
    }

    #[test]
    fn test_operator_replaces_pending_without_evaluating() {
        let state = press(&[
            digit(1),
            Key::Binary(BinaryOp::Add),
            digit(2),
            Key::Binary(BinaryOp::Multiply),
            digit(3),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "6");
    }

    #[test]
    fn test_power() {
        let state = press(&[digit(2), Key::Binary(BinaryOp::Power), digit(8), Key::Equals]);
        assert_eq!(state.display(), "256");
    }

    #[test]
    fn test_clear_restores_initial_state() {
        let state = press(&[
            digit(7),
            Key::Binary(BinaryOp::Divide),
            digit(2),
            Key::Clear,
        ]);
        assert_eq!(state, CalcState::new());

        let errored = press(&[digit(0), Key::Unary(UnaryOp::Log10), Key::Clear]);
        assert_eq!(errored, CalcState::new());
    }

    #[test]
    fn test_clear_keeps_angle_mode() {
        let state = press(&[Key::ToggleAngleMode, digit(5), Key::Clear]);
        assert_eq!(state, CalcState::with_angle_mode(AngleMode::Degrees));
    }

    #[test]
    fn test_negate() {
        assert_eq!(press(&[digit(5), Key::Negate]).display(), "-5");
        assert_eq!(press(&[digit(5), Key::Negate, Key::Negate]).display(), "5");
        assert_eq!(press(&[Key::Negate]).display(), "0");
    }

    #[test]
    fn test_negated_number_keeps_typing() {
        let state = press(&[digit(5), Key::Negate, digit(3)]);
        assert_eq!(state.display(), "-53");
    }

    #[test]
    fn test_recovery_after_error() {
        let errored = press(&[digit(0), Key::Unary(UnaryOp::Reciprocal)]);
        assert!(errored.is_error());

        assert_eq!(apply(digit(7), &errored).display(), "7");
        assert_eq!(apply(Key::Decimal, &errored).display(), "0.");
    }

    #[test]
    fn test_keys_on_error_display_are_ignored() {
        let errored = press(&[digit(0), Key::Unary(UnaryOp::NaturalLog)]);
        for key in [
            Key::Negate,
            Key::Binary(BinaryOp::Add),
            Key::Unary(UnaryOp::Square),
            Key::Equals,
        ] {
            assert_eq!(apply(key, &errored), errored, "{key} changed the error state");
        }
    }

    #[test]
    fn test_stale_operation_cleared_after_error() {
        let state = press(&[
            digit(5),
            Key::Binary(BinaryOp::Add),
            digit(1),
            Key::Negate,
            Key::Unary(UnaryOp::SquareRoot),
            digit(2),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "2");
    }

    #[test]
    fn test_constants_replace_display() {
        let state = press(&[digit(2), Key::Unary(UnaryOp::Pi)]);
        assert_eq!(state.display(), "3.14159265");

        let errored = press(&[digit(0), Key::Unary(UnaryOp::Log10)]);
        assert_eq!(apply(Key::Unary(UnaryOp::E), &errored).display(), "2.71828183");
    }

    #[test]
    fn test_sine_in_both_angle_modes() {
        let rad = press(&[digit(9), digit(0), Key::Unary(UnaryOp::Sine)]);
        let value: f64 = rad.display().parse().unwrap();
        assert!((value - 0.8939966636).abs() < 1e-8);

        let deg = press(&[Key::ToggleAngleMode, digit(9), digit(0), Key::Unary(UnaryOp::Sine)]);
        assert_eq!(deg.display(), "1");
    }

    #[test]
    fn test_angle_mode_does_not_affect_other_operations() {
        let keys = [digit(1), digit(6), Key::Unary(UnaryOp::SquareRoot)];
        let rad = press(&keys);
        let deg = run(CalcState::with_angle_mode(AngleMode::Degrees), &keys);
        assert_eq!(rad.display(), deg.display());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(press(&[digit(5), Key::Unary(UnaryOp::Percentage)]).display(), "0.05");
    }

    #[test]
    fn test_overflowing_power_is_error() {
        let state = press(&[
            digit(9),
            Key::Binary(BinaryOp::Power),
            digit(9),
            digit(9),
            digit(9),
            Key::Equals,
        ]);
        assert!(state.is_error());
    }

    #[test]
    fn test_result_feeds_next_operation() {
        let state = press(&[
            digit(6),
            Key::Binary(BinaryOp::Multiply),
            digit(7),
            Key::Equals,
            Key::Binary(BinaryOp::Divide),
            digit(2),
            Key::Equals,
        ]);
        assert_eq!(state.display(), "21");
    }
}
