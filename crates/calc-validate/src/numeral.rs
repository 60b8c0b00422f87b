//! Conversion of typed display text into decimal operands.
//!
//! The keypad accepts malformed sequences such as `1.2.3` at the text level;
//! they are rejected here, when the text is turned into an operand.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use calc_model::{CalcError, Result};

/// Syntactic pieces of a decimal numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Numeral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> Numeral<'a> {
    /// Split `text` into sign, integer digits and fraction digits.
    ///
    /// Accepts an optional sign, digits, at most one `.`, and requires at
    /// least one digit overall, so `0.` and `.5` are valid numerals.
    fn scan(text: &'a str) -> Option<Self> {
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (body, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        Some(Self {
            negative,
            integer,
            fraction,
        })
    }

    fn significant_integer(&self) -> &'a str {
        self.integer.trim_start_matches('0')
    }

    /// Canonical spelling accepted by the decimal parser.
    fn canonical(&self) -> String {
        let integer = match self.significant_integer() {
            "" => "0",
            digits => digits,
        };
        let sign = if self.negative { "-" } else { "" };
        if self.fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}.{}", self.fraction)
        }
    }
}

/// Parse calculator display text into a decimal, keeping its written scale.
///
/// # Errors
///
/// `InvalidNumberFormat` when `text` is not a decimal numeral. Range and
/// precision are not checked here; see [`crate::validate_input`].
pub fn parse_number(text: &str) -> Result<BigDecimal> {
    let numeral = Numeral::scan(text).ok_or_else(|| CalcError::invalid_number(text))?;
    BigDecimal::from_str(&numeral.canonical()).map_err(|_| CalcError::invalid_number(text))
}
