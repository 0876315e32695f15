//! Key parsing for the terminal front end.
//!
//! A line of input is split on whitespace. Each word is either a named key
//! or command (`sqrt`, `clear`, `copy`, ...) or a run of symbol keys such as
//! `12+3=`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::{BinaryOp, Digit, Key, UnaryOp};
use crate::error::KeyError;

/// Front-end commands that do not reach the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Copy the display to the clipboard.
    Copy,
    /// Show or hide the scientific panel.
    ToggleScientific,
    /// Print the status line again.
    Show,
    Quit,
}

/// One parsed unit of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Command(Command),
}

impl From<Key> for Input {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

lazy_static! {
    /// Matches a single symbol key.
    static ref SYMBOL_KEY: Regex = Regex::new(
        r"[0-9]|\.|[+\-*×/÷^%=√π²]"
    ).unwrap();
}

/// Parse a line of input.
///
/// Fails on the first word that is neither a named key nor fully made of
/// symbol keys; nothing from the line should be applied in that case.
pub fn parse_line(line: &str) -> Result<Vec<Input>, KeyError> {
    let mut inputs = Vec::new();
    for word in line.split_whitespace() {
        parse_word(word, &mut inputs)?;
    }
    Ok(inputs)
}

fn parse_word(word: &str, inputs: &mut Vec<Input>) -> Result<(), KeyError> {
    if let Some(input) = named_input(&word.to_lowercase()) {
        inputs.push(input);
        return Ok(());
    }

    let mut pos = 0;
    for m in SYMBOL_KEY.find_iter(word) {
        if m.start() != pos {
            return Err(KeyError::Unknown(word.to_string()));
        }
        let key = symbol_key(m.as_str()).ok_or_else(|| KeyError::Unknown(word.to_string()))?;
        inputs.push(key.into());
        pos = m.end();
    }

    if pos != word.len() {
        return Err(KeyError::Unknown(word.to_string()));
    }

    Ok(())
}

fn named_input(word: &str) -> Option<Input> {
    let key = match word {
        "add" => Key::Binary(BinaryOp::Add),
        "sub" => Key::Binary(BinaryOp::Subtract),
        "mul" => Key::Binary(BinaryOp::Multiply),
        "div" => Key::Binary(BinaryOp::Divide),
        "pow" | "xy" | "xʸ" => Key::Binary(BinaryOp::Power),
        "sqrt" => Key::Unary(UnaryOp::SquareRoot),
        "sq" | "x2" | "x²" => Key::Unary(UnaryOp::Square),
        "1/x" | "inv" | "recip" => Key::Unary(UnaryOp::Reciprocal),
        "sin" => Key::Unary(UnaryOp::Sine),
        "cos" => Key::Unary(UnaryOp::Cosine),
        "tan" => Key::Unary(UnaryOp::Tangent),
        "log" => Key::Unary(UnaryOp::Log10),
        "ln" => Key::Unary(UnaryOp::NaturalLog),
        "pi" => Key::Unary(UnaryOp::Pi),
        "e" => Key::Unary(UnaryOp::E),
        "ac" | "c" | "clear" => Key::Clear,
        "+/-" | "neg" | "±" => Key::Negate,
        "rad" | "deg" | "angle" => Key::ToggleAngleMode,
        "eq" => Key::Equals,
        "copy" => return Some(Input::Command(Command::Copy)),
        "sci" => return Some(Input::Command(Command::ToggleScientific)),
        "show" | "state" => return Some(Input::Command(Command::Show)),
        "quit" | "exit" | "q" => return Some(Input::Command(Command::Quit)),
        _ => return None,
    };
    Some(Input::Key(key))
}

fn symbol_key(symbol: &str) -> Option<Key> {
    let mut chars = symbol.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if let Some(digit) = Digit::from_char(c) {
        return Some(Key::Digit(digit));
    }

    let key = match c {
        '.' => Key::Decimal,
        '+' => Key::Binary(BinaryOp::Add),
        '-' => Key::Binary(BinaryOp::Subtract),
        '*' | '×' => Key::Binary(BinaryOp::Multiply),
        '/' | '÷' => Key::Binary(BinaryOp::Divide),
        '^' => Key::Binary(BinaryOp::Power),
        '%' => Key::Unary(UnaryOp::Percentage),
        '=' => Key::Equals,
        '√' => Key::Unary(UnaryOp::SquareRoot),
        'π' => Key::Unary(UnaryOp::Pi),
        '²' => Key::Unary(UnaryOp::Square),
        _ => return None,
    };
    Some(key)
}
