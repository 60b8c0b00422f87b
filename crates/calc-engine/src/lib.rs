//! Arithmetic engine for the calculator.
//!
//! Four binary operations over arbitrary-precision [`BigDecimal`] values.
//! Addition, subtraction and multiplication are exact. Every result has its
//! trailing zeros stripped, so `4.50 + 0` yields `4.5` and integral results
//! carry no fractional part. Division rounds half-up to [`DIVISION_SCALE`]
//! fractional digits, which bounds non-terminating quotients such as `10 / 3`.
//!
//! The engine holds no state and may be called from any thread.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use calc_model::{CalcError, Operation, Result};
use tracing::trace;

/// Fractional digits retained by [`divide`].
pub const DIVISION_SCALE: i64 = 10;

pub fn add(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    (a + b).normalized()
}

pub fn subtract(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    (a - b).normalized()
}

pub fn multiply(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    (a * b).normalized()
}

/// Divide `a` by `b`, rounding half-up to [`DIVISION_SCALE`] digits.
///
/// The quotient is first computed to `bigdecimal`'s default of 100
/// significant digits. Accepted operands have at most 20 integer and 10
/// fraction digits, so the quotient has at most 31 integer digits and the
/// rounding to [`DIVISION_SCALE`] sees every digit that matters.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when `b` is zero.
pub fn divide(a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    let quotient = a / b;
    Ok(quotient
        .with_scale_round(DIVISION_SCALE, RoundingMode::HalfUp)
        .normalized())
}

/// Apply `op` to the operands.
pub fn apply(op: Operation, a: &BigDecimal, b: &BigDecimal) -> Result<BigDecimal> {
    let result = match op {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
    };
    trace!(%a, %op, %b, ok = result.is_ok(), "applied operation");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn plain(value: &BigDecimal) -> String {
        value.to_plain_string()
    }

    #[test]
    fn add_strips_trailing_zeros() {
        let sum = add(&dec("4.50"), &dec("0"));
        assert_eq!(plain(&sum), "4.5");
    }

    #[test]
    fn integral_results_have_no_fraction() {
        assert_eq!(plain(&add(&dec("2.5"), &dec("2.5"))), "5");
        assert_eq!(plain(&multiply(&dec("0.5"), &dec("4"))), "2");
        assert_eq!(plain(&subtract(&dec("10.00"), &dec("2"))), "8");
        assert_eq!(plain(&add(&dec("60"), &dec("40"))), "100");
    }

    #[test]
    fn arithmetic_is_exact_at_full_width() {
        assert_eq!(
            plain(&add(&dec("10000000000000000000"), &dec("0.0000000001"))),
            "10000000000000000000.0000000001"
        );
        assert_eq!(
            plain(&multiply(
                &dec("1234567890.1234567891"),
                &dec("1234567890.1234567891")
            )),
            "1524157875323883675.26596557677488187881"
        );
        assert_eq!(
            plain(&multiply(
                &dec("100000000000000000000"),
                &dec("100000000000000000000")
            )),
            "10000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn divide_rounds_to_ten_places() {
        assert_eq!(plain(&divide(&dec("10"), &dec("3")).unwrap()), "3.3333333333");
        assert_eq!(plain(&divide(&dec("2"), &dec("3")).unwrap()), "0.6666666667");
        assert_eq!(plain(&divide(&dec("-2"), &dec("3")).unwrap()), "-0.6666666667");
        assert_eq!(plain(&divide(&dec("100"), &dec("4")).unwrap()), "25");
    }

    #[test]
    fn divide_rounds_midpoint_away_from_zero() {
        // 0.00000000005 sits exactly between two representable results.
        assert_eq!(
            plain(&divide(&dec("0.0000000001"), &dec("2")).unwrap()),
            "0.0000000001"
        );
        assert_eq!(
            plain(&divide(&dec("-0.0000000001"), &dec("2")).unwrap()),
            "-0.0000000001"
        );
    }

    #[test]
    fn divide_handles_widest_quotient() {
        assert_eq!(
            plain(&divide(&dec("100000000000000000000"), &dec("0.0000000001")).unwrap()),
            "1000000000000000000000000000000"
        );
        assert_eq!(
            plain(&divide(&dec("99999999999999999999.9999999999"), &dec("3")).unwrap()),
            "33333333333333333333.3333333333"
        );
    }

    #[test]
    fn divide_by_zero_fails() {
        let err = divide(&dec("5"), &dec("0.000")).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
    }

    #[test]
    fn apply_dispatches_by_operation() {
        let (a, b) = (dec("6"), dec("3"));
        assert_eq!(apply(Operation::Add, &a, &b).unwrap(), dec("9"));
        assert_eq!(apply(Operation::Subtract, &a, &b).unwrap(), dec("3"));
        assert_eq!(apply(Operation::Multiply, &a, &b).unwrap(), dec("18"));
        assert_eq!(apply(Operation::Divide, &a, &b).unwrap(), dec("2"));
    }
}
