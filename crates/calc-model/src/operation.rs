//! The four arithmetic operations understood by the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Binary operation applied to the first and second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// Every supported operation, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Returns the one-character symbol for this operation.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Map a symbol character onto an operation.
    pub fn from_char(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Parse an operator symbol.
    ///
    /// Blank input is reported as [`CalcError::MissingOperation`]; anything
    /// else that is not exactly one of `+ - * /` is unsupported.
    pub fn from_symbol(symbol: &str) -> Result<Self, CalcError> {
        if symbol.trim().is_empty() {
            return Err(CalcError::MissingOperation);
        }
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch).ok_or_else(|| CalcError::unsupported(symbol)),
            _ => Err(CalcError::unsupported(symbol)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl TryFrom<char> for Operation {
    type Error = CalcError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value).ok_or_else(|| CalcError::unsupported(value.to_string()))
    }
}
