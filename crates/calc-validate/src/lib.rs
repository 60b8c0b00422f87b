//! Input validation for the calculator.
//!
//! Guards every operand and operator before it reaches the arithmetic engine:
//! magnitude ceiling, fractional-digit ceiling, operator legality and the
//! zero-divisor check. All functions are pure.

mod numeral;
mod validator;

pub use numeral::parse_number;
pub use validator::{
    MAX_FRACTION_DIGITS, MAX_MAGNITUDE_TEXT, SUPPORTED_OPERATIONS, max_magnitude,
    validate_calculation, validate_input, validate_operation, validate_precision,
    validate_range,
};
