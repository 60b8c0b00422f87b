//! Inbound key events and outbound responses of the calculation core.

use std::fmt;

use serde::Serialize;

use crate::operation::Operation;
use crate::result::CalculationResult;

/// A digit key: `0` through `9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// Returns `None` unless `ch` is an ASCII digit or `.`.
    pub fn new(ch: char) -> Option<Self> {
        (ch.is_ascii_digit() || ch == '.').then_some(Self(ch))
    }

    /// Digit key for a numeric value in `0..=9`.
    pub fn from_value(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(Self)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical event accepted by the calculation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
}

/// What the core hands back to the presentation layer for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Updated display text (digit, backspace and clear events).
    Display(String),
    /// Outcome of an operator or equals event.
    Result(CalculationResult),
}

impl Response {
    /// Text the presentation layer should render for this response.
    pub fn display_text(&self) -> String {
        match self {
            Response::Display(text) => text.clone(),
            Response::Result(result) => result.display_value(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Result(result) if !result.is_success())
    }
}
