//! Range, precision and operator checks.
//!
//! Every check fails fast with a named error instead of clamping the value.

use calc_model::{CalcError, Operation, Result};
use bigdecimal::{BigDecimal, Zero};
use tracing::debug;

/// Largest accepted magnitude, as shown in error messages.
pub const MAX_MAGNITUDE_TEXT: &str = "1E+20";

/// Maximum number of fractional digits an operand may carry.
pub const MAX_FRACTION_DIGITS: i64 = 10;

/// Operator symbols accepted by [`validate_operation`].
pub const SUPPORTED_OPERATIONS: [&str; 4] = ["+", "-", "*", "/"];

/// Largest accepted magnitude (`1E+20`).
pub fn max_magnitude() -> BigDecimal {
    BigDecimal::new(1u8.into(), -20)
}

/// Fails with `OutOfRange` when `|number|` exceeds [`max_magnitude`].
pub fn validate_range(number: &BigDecimal) -> Result<()> {
    if number.abs() > max_magnitude() {
        debug!(%number, "number exceeds maximum magnitude");
        return Err(CalcError::OutOfRange {
            limit: MAX_MAGNITUDE_TEXT,
        });
    }
    Ok(())
}

/// Fails with `TooPrecise` when `number` has more than
/// [`MAX_FRACTION_DIGITS`] fractional digits.
///
/// The scale is taken as written, so `1.50000000000` counts eleven digits.
pub fn validate_precision(number: &BigDecimal) -> Result<()> {
    let (_, scale) = number.as_bigint_and_exponent();
    if scale > MAX_FRACTION_DIGITS {
        debug!(%number, scale, "number exceeds maximum precision");
        return Err(CalcError::TooPrecise {
            scale,
            limit: MAX_FRACTION_DIGITS,
        });
    }
    Ok(())
}

/// Checks that `symbol` names a supported operation and returns it.
pub fn validate_operation(symbol: &str) -> Result<Operation> {
    Operation::from_symbol(symbol)
}

/// Range check followed by precision check.
pub fn validate_input(number: &BigDecimal) -> Result<()> {
    validate_range(number)?;
    validate_precision(number)
}

/// Validate both operands and the operator of a pending calculation.
///
/// Checks run in a fixed order and the first failure wins: first operand,
/// second operand, operator, then the zero-divisor check.
pub fn validate_calculation(a: &BigDecimal, b: &BigDecimal, symbol: &str) -> Result<Operation> {
    validate_input(a)?;
    validate_input(b)?;
    let operation = validate_operation(symbol)?;
    if operation == Operation::Divide && b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_model::ErrorKind;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn range_boundary_is_inclusive() {
        assert!(validate_range(&dec("100000000000000000000")).is_ok());
        assert!(validate_range(&dec("-100000000000000000000")).is_ok());
        let err = validate_range(&dec("100000000000000000000.1")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            err.to_string(),
            "Number is too large. Maximum absolute value allowed is 1E+20"
        );
    }

    #[test]
    fn precision_counts_written_digits() {
        assert!(validate_precision(&dec("0.1234567890")).is_ok());
        assert_eq!(
            validate_precision(&dec("0.12345678901")).unwrap_err().kind(),
            ErrorKind::TooPrecise
        );
        assert_eq!(
            validate_precision(&dec("1.50000000000")).unwrap_err().kind(),
            ErrorKind::TooPrecise
        );
    }

    #[test]
    fn input_composes_range_and_precision() {
        assert!(validate_input(&dec("-12345.6789")).is_ok());
        assert!(validate_input(&dec("99999999999999999999.9999999999")).is_ok());
        assert!(validate_input(&dec("-99999999999999999999.9999999999")).is_ok());
        let err = validate_input(&dec("200000000000000000000.1234567")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        let err = validate_input(&dec("3.14159265358979")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooPrecise);
    }

    #[test]
    fn operation_rejects_blank_and_unknown() {
        assert_eq!(validate_operation("*").unwrap(), Operation::Multiply);
        assert_eq!(validate_operation("").unwrap_err(), CalcError::MissingOperation);
        assert_eq!(
            validate_operation("%").unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn calculation_check_order() {
        let huge = dec("200000000000000000000");
        let zero = BigDecimal::zero();
        let one = BigDecimal::from(1);

        // Operand problems surface before the operator.
        let err = validate_calculation(&huge, &zero, "%").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        // Second operand is checked before the operator.
        let err = validate_calculation(&one, &dec("0.00000000001"), "%").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooPrecise);

        // Operator is checked before the zero divisor.
        let err = validate_calculation(&one, &zero, "^").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);

        let err = validate_calculation(&one, &zero, "/").unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);

        assert_eq!(
            validate_calculation(&one, &zero, "*").unwrap(),
            Operation::Multiply
        );
    }
}
