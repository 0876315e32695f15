//! Arithmetic and display formatting.
//!
//! The helpers here return [`DomainError`] for results the display cannot
//! show; the engine turns those into the error sentinel.

use super::key::{AngleMode, BinaryOp, UnaryOp};
use crate::error::DomainError;

/// Text shown in place of a number after a domain error.
pub const ERROR_SENTINEL: &str = "Error";

/// Maximum number of fractional digits shown on the display.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Parse the display text as a number.
///
/// Returns `None` for the error sentinel and anything else that is not a
/// finite decimal.
pub fn parse_display(display: &str) -> Option<f64> {
    display.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a number for the display.
///
/// At most [`MAX_FRACTION_DIGITS`] fractional digits, trailing zeros trimmed,
/// no thousand separators. Negative zero (including values that round to
/// zero) renders as `"0"`.
pub fn format_number(value: f64) -> Result<String, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite);
    }

    let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        Ok("0".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Apply a binary operation to the captured left operand and the current value.
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, DomainError> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Subtract => left - right,
        BinaryOp::Multiply => left * right,
        BinaryOp::Divide => {
            if right == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            left / right
        }
        BinaryOp::Power => left.powf(right),
    };

    finite(result)
}

/// Apply a unary function to the current value.
pub fn evaluate_unary(op: UnaryOp, value: f64, angle: AngleMode) -> Result<f64, DomainError> {
    let arg = if op.is_trigonometric() {
        angle.to_radians(value)
    } else {
        value
    };

    let result = match op {
        UnaryOp::Percentage => value / 100.0,
        UnaryOp::SquareRoot => {
            if value < 0.0 {
                return Err(DomainError::NegativeSquareRoot);
            }
            value.sqrt()
        }
        UnaryOp::Sine => arg.sin(),
        UnaryOp::Cosine => arg.cos(),
        UnaryOp::Tangent => arg.tan(),
        UnaryOp::Log10 => {
            if value <= 0.0 {
                return Err(DomainError::NonPositiveLogarithm);
            }
            value.log10()
        }
        UnaryOp::NaturalLog => {
            if value <= 0.0 {
                return Err(DomainError::NonPositiveLogarithm);
            }
            value.ln()
        }
        UnaryOp::Square => value * value,
        UnaryOp::Reciprocal => {
            if value == 0.0 {
                return Err(DomainError::DivisionByZero);
            }
            1.0 / value
        }
        UnaryOp::Pi => std::f64::consts::PI,
        UnaryOp::E => std::f64::consts::E,
    };

    finite(result)
}

fn finite(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NotFinite)
    }
}
