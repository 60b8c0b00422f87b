//! Outcome of an operator or equals keypress.

use bigdecimal::BigDecimal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{CalcError, ErrorKind};

/// Either a computed value or an error with its category and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationResult {
    Success { value: BigDecimal },
    Error { kind: ErrorKind, message: String },
}

impl CalculationResult {
    pub fn success(value: BigDecimal) -> Self {
        Self::Success { value }
    }

    pub fn error(error: &CalcError) -> Self {
        Self::Error {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the value, or `None` for an error result.
    pub fn value(&self) -> Option<&BigDecimal> {
        match self {
            Self::Success { value } => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// Returns the error category, or `None` for a successful result.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }

    /// Text to show on the calculator display.
    ///
    /// Success values are rendered without trailing zeros and never in
    /// exponent notation; errors render their message.
    pub fn display_value(&self) -> String {
        match self {
            Self::Success { value } => format_plain(value),
            Self::Error { message, .. } => message.clone(),
        }
    }
}

impl From<Result<BigDecimal, CalcError>> for CalculationResult {
    fn from(result: Result<BigDecimal, CalcError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::error(&error),
        }
    }
}

impl Serialize for CalculationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { value } => {
                let mut state = serializer.serialize_struct("CalculationResult", 3)?;
                state.serialize_field("status", "success")?;
                state.serialize_field("value", &value.to_plain_string())?;
                state.serialize_field("display", &format_plain(value))?;
                state.end()
            }
            Self::Error { kind, message } => {
                let mut state = serializer.serialize_struct("CalculationResult", 3)?;
                state.serialize_field("status", "error")?;
                state.serialize_field("kind", kind)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}

/// Render a decimal with trailing zeros stripped, in plain notation.
pub fn format_plain(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
