//! Error taxonomy shared by every calculator crate.
//!
//! Errors are values: each fallible call returns `Result<_, CalcError>` and the
//! presentation layer decides how to surface the message.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating input or evaluating a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Typed text is not a decimal numeral.
    #[error("Invalid number format")]
    InvalidNumberFormat { input: String },

    /// Operator symbol was empty or blank.
    #[error("Operation cannot be null or empty")]
    MissingOperation,

    /// Operator symbol is not one of `+ - * /`.
    #[error("Unsupported operation: {symbol}. Supported operations are: +, -, *, /")]
    UnsupportedOperation { symbol: String },

    /// Operand magnitude exceeds the configured ceiling.
    #[error("Number is too large. Maximum absolute value allowed is {limit}")]
    OutOfRange { limit: &'static str },

    /// Operand carries more fractional digits than allowed.
    #[error("Number has too many decimal places. Maximum allowed is {limit}")]
    TooPrecise { scale: i64, limit: i64 },

    #[error("Division by zero")]
    DivisionByZero,

    /// A key with no binding reached the keypad.
    #[error("Invalid input")]
    InvalidInput { key: String },
}

impl CalcError {
    /// Create an `InvalidNumberFormat` error for the given text.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumberFormat {
            input: input.into(),
        }
    }

    /// Create an `UnsupportedOperation` error for the given symbol.
    pub fn unsupported(symbol: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            symbol: symbol.into(),
        }
    }

    /// Returns the closed error category for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidNumberFormat { .. } => ErrorKind::InvalidNumberFormat,
            CalcError::MissingOperation | CalcError::UnsupportedOperation { .. } => {
                ErrorKind::UnsupportedOperation
            }
            CalcError::OutOfRange { .. } => ErrorKind::OutOfRange,
            CalcError::TooPrecise { .. } => ErrorKind::TooPrecise,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Closed set of error categories reported across the core boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidNumberFormat,
    UnsupportedOperation,
    OutOfRange,
    TooPrecise,
    DivisionByZero,
    InvalidInput,
}

impl ErrorKind {
    /// Returns the canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidNumberFormat => "invalid_number_format",
            ErrorKind::UnsupportedOperation => "unsupported_operation",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::TooPrecise => "too_precise",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
