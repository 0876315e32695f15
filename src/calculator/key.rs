//! Key vocabulary for the calculator keypad.
//!
//! Every button on the keypad and the scientific panel maps to exactly one
//! [`Key`]. The engine consumes nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from its ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Operators that take a left operand captured earlier and the current display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Symbol shown next to the display while the operation is pending.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

/// Functions computed immediately from the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    SquareRoot,
    Percentage,
    Sine,
    Cosine,
    Tangent,
    Log10,
    NaturalLog,
    Square,
    Reciprocal,
    Pi,
    E,
}

impl UnaryOp {
    /// Whether this is one of the trigonometric functions affected by [`AngleMode`].
    pub fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sine | Self::Cosine | Self::Tangent)
    }

    /// Constants ignore the display entirely.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }
}

/// How trigonometric functions interpret their argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Convert an angle in this mode to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => value.to_radians(),
        }
    }

    /// Label of the mode button ("RAD" / "DEG").
    pub fn label(self) -> &'static str {
        match self {
            Self::Radians => "RAD",
            Self::Degrees => "DEG",
        }
    }
}

/// A discrete keypad event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Clear,
    Negate,
    Binary(BinaryOp),
    Unary(UnaryOp),
    ToggleAngleMode,
    Equals,
}

impl Key {
    /// Whether the key lives on the scientific panel rather than the main keypad.
    pub fn is_scientific(self) -> bool {
        match self {
            Self::Binary(op) => op == BinaryOp::Power,
            Self::Unary(op) => op != UnaryOp::Percentage,
            Self::ToggleAngleMode => true,
            _ => false,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d.as_char()),
            Self::Decimal => f.write_str("."),
            Self::Clear => f.write_str("AC"),
            Self::Negate => f.write_str("+/-"),
            Self::Binary(op) => f.write_str(op.symbol()),
            Self::Unary(op) => f.write_str(match op {
                UnaryOp::SquareRoot => "√",
                UnaryOp::Percentage => "%",
                UnaryOp::Sine => "sin",
                UnaryOp::Cosine => "cos",
                UnaryOp::Tangent => "tan",
                UnaryOp::Log10 => "log",
                UnaryOp::NaturalLog => "ln",
                UnaryOp::Square => "x²",
                UnaryOp::Reciprocal => "1/x",
                UnaryOp::Pi => "π",
                UnaryOp::E => "e",
            }),
            Self::ToggleAngleMode => f.write_str("RAD/DEG"),
            Self::Equals => f.write_str("="),
        }
    }
}
