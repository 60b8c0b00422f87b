//! Transitions of the calculation state machine.
//!
//! Each method is one atomic transition over a [`CalculatorSession`]. Failed
//! transitions return the error and leave the session as it was.

use calc_model::{CalcError, CalculationResult, Digit, Event, Operation, Response, format_plain};
use calc_validate::{parse_number, validate_calculation, validate_input};
use bigdecimal::BigDecimal;
use tracing::{debug, trace, warn};

use crate::session::{CalculatorSession, INITIAL_INPUT};

impl CalculatorSession {
    /// Feed a digit or decimal point and return the display text.
    ///
    /// The first digit after an operator or equals starts a fresh operand; a
    /// point in that position starts it as `0.`. A lone `0` is replaced by
    /// the next digit but extended by `.`. Repeated decimal points are
    /// accepted here and rejected when the operand is parsed.
    pub fn process_digit(&mut self, digit: Digit) -> &str {
        let ch = digit.as_char();
        if self.awaiting_new_number {
            self.current_input.clear();
            if digit.is_point() {
                self.current_input.push_str(INITIAL_INPUT);
            }
            self.current_input.push(ch);
            self.awaiting_new_number = false;
        } else if self.current_input == INITIAL_INPUT && !digit.is_point() {
            self.current_input.clear();
            self.current_input.push(ch);
        } else {
            self.current_input.push(ch);
        }
        &self.current_input
    }

    /// Choose `operation`, resolving any operand typed since the last one.
    ///
    /// Without a first operand the typed text becomes the first operand. If a
    /// chain is running and a new number was entered, the pending calculation
    /// is executed first and its result becomes the first operand.
    ///
    /// # Errors
    ///
    /// `InvalidNumberFormat` for unparseable text, or whatever the pending
    /// calculation fails with.
    pub fn process_operation(&mut self, operation: Operation) -> Result<BigDecimal, CalcError> {
        let first = match self.first_operand.clone() {
            None => parse_number(&self.current_input)?,
            Some(_) if !self.awaiting_new_number => self.execute()?,
            Some(first) => first,
        };
        self.first_operand = Some(first.clone());
        self.pending_operation = Some(operation);
        self.awaiting_new_number = true;
        Ok(first)
    }

    /// Resolve the pending calculation.
    ///
    /// With no pending operator (or no first operand) the typed text is
    /// validated and returned as-is. Otherwise the typed text is the second
    /// operand; the result is logged to history and the next digit starts a
    /// fresh operand.
    pub fn execute(&mut self) -> Result<BigDecimal, CalcError> {
        let (Some(first), Some(pending)) = (&self.first_operand, self.pending_operation) else {
            let value = parse_number(&self.current_input)?;
            validate_input(&value)?;
            return Ok(value);
        };
        let second = parse_number(&self.current_input)?;
        let operation = validate_calculation(first, &second, &pending.to_string())?;
        let result = calc_engine::apply(operation, first, &second)?;

        let entry = format!(
            "{} {operation} {} = {}",
            first.to_plain_string(),
            second.to_plain_string(),
            format_plain(&result)
        );
        trace!(entry = %entry, "recording history entry");
        self.history.push(entry);
        self.awaiting_new_number = true;
        Ok(result)
    }

    /// Equals key: execute and commit the result as the new first operand.
    ///
    /// The committed result is also the display text, so a following
    /// operator chains from it.
    pub fn process_equals(&mut self) -> Result<BigDecimal, CalcError> {
        let result = self.execute()?;
        self.current_input = format_plain(&result);
        self.first_operand = Some(result.clone());
        self.pending_operation = None;
        Ok(result)
    }

    /// Remove the last typed character; a single remaining character
    /// becomes `0`.
    pub fn backspace(&mut self) -> &str {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input.clear();
            self.current_input.push_str(INITIAL_INPUT);
        }
        &self.current_input
    }

    /// Dispatch one inbound event and build the outbound response.
    pub fn handle(&mut self, event: Event) -> Response {
        let response = match event {
            Event::Digit(digit) => Response::Display(self.process_digit(digit).to_string()),
            Event::Operator(operation) => {
                let outcome = self.process_operation(operation);
                Response::Result(self.resolve(outcome))
            }
            Event::Equals => {
                let outcome = self.process_equals();
                Response::Result(self.resolve(outcome))
            }
            Event::Clear => {
                self.clear();
                Response::Display(self.current_input.clone())
            }
            Event::Backspace => Response::Display(self.backspace().to_string()),
        };
        debug!(
            ?event,
            phase = %self.phase(),
            display = %response.display_text(),
            "handled event"
        );
        response
    }

    fn resolve(&self, outcome: Result<BigDecimal, CalcError>) -> CalculationResult {
        if let Err(error) = &outcome {
            warn!(kind = %error.kind(), phase = %self.phase(), "{error}");
        }
        outcome.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;
    use calc_model::ErrorKind;

    fn digit(ch: char) -> Digit {
        Digit::new(ch).unwrap()
    }

    fn type_digits(session: &mut CalculatorSession, digits: &str) {
        for ch in digits.chars() {
            session.process_digit(digit(ch));
        }
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut session = CalculatorSession::new();
        assert_eq!(session.process_digit(digit('0')), "0");
        assert_eq!(session.process_digit(digit('5')), "5");
    }

    #[test]
    fn point_extends_zero() {
        let mut session = CalculatorSession::new();
        assert_eq!(session.process_digit(digit('.')), "0.");
        assert_eq!(session.process_digit(digit('5')), "0.5");
    }

    #[test]
    fn point_after_operator_starts_from_zero() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "5");
        session.process_operation(Operation::Add).unwrap();
        assert_eq!(session.process_digit(digit('.')), "0.");
        assert_eq!(session.process_digit(digit('5')), "0.5");
        assert_eq!(session.process_equals().unwrap().to_plain_string(), "5.5");
        assert_eq!(session.history().latest(), Some("5 + 0.5 = 5.5"));

        assert_eq!(session.process_digit(digit('.')), "0.");
    }

    #[test]
    fn zero_then_point_keeps_zero() {
        let mut session = CalculatorSession::new();
        session.process_digit(digit('0'));
        assert_eq!(session.process_digit(digit('.')), "0.");
    }

    #[test]
    fn repeated_points_are_accepted_as_text() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "1.2.3");
        assert_eq!(session.current_input(), "1.2.3");

        let err = session.process_operation(Operation::Add).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumberFormat);
        assert_eq!(session.first_operand(), None);
        assert_eq!(session.pending_operation(), None);
    }

    #[test]
    fn operator_stores_first_operand() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "12");
        let first = session.process_operation(Operation::Multiply).unwrap();
        assert_eq!(first, BigDecimal::from(12));
        assert_eq!(session.pending_operation(), Some(Operation::Multiply));
        assert!(session.awaiting_new_number());
        assert_eq!(session.phase(), Phase::OperatorChosen);
    }

    #[test]
    fn second_operator_resolves_pending_calculation() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "5");
        session.process_operation(Operation::Add).unwrap();
        type_digits(&mut session, "3");
        assert_eq!(session.phase(), Phase::EnteringSecondOperand);

        let first = session.process_operation(Operation::Subtract).unwrap();
        assert_eq!(first, BigDecimal::from(8));
        assert_eq!(session.pending_operation(), Some(Operation::Subtract));
        assert_eq!(session.history().latest(), Some("5 + 3 = 8"));
    }

    #[test]
    fn switching_operator_does_not_calculate() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "9");
        session.process_operation(Operation::Add).unwrap();
        let first = session.process_operation(Operation::Divide).unwrap();
        assert_eq!(first, BigDecimal::from(9));
        assert_eq!(session.pending_operation(), Some(Operation::Divide));
        assert!(session.history().is_empty());
    }

    #[test]
    fn chained_failure_leaves_session_untouched() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "7");
        session.process_operation(Operation::Divide).unwrap();
        type_digits(&mut session, "0");

        let err = session.process_operation(Operation::Add).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(session.first_operand(), Some(&BigDecimal::from(7)));
        assert_eq!(session.pending_operation(), Some(Operation::Divide));
        assert!(!session.awaiting_new_number());
    }

    #[test]
    fn execute_without_operator_returns_input() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "4.20");
        let value = session.execute().unwrap();
        assert_eq!(value.to_plain_string(), "4.20");
        assert!(session.history().is_empty());
    }

    #[test]
    fn history_entry_spells_operands_as_written() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "1.50");
        session.process_operation(Operation::Multiply).unwrap();
        type_digits(&mut session, "100000000000000000000");
        session.process_equals().unwrap();
        assert_eq!(
            session.history().latest(),
            Some("1.50 * 100000000000000000000 = 150000000000000000000")
        );
    }

    #[test]
    fn execute_without_operator_validates_input() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "0.123456789012");
        let err = session.execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooPrecise);
    }

    #[test]
    fn equals_commits_result() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "10");
        session.process_operation(Operation::Divide).unwrap();
        type_digits(&mut session, "4");
        let result = session.process_equals().unwrap();
        assert_eq!(result.to_plain_string(), "2.5");
        assert_eq!(session.current_input(), "2.5");
        assert_eq!(session.first_operand(), Some(&result));
        assert_eq!(session.pending_operation(), None);
        assert_eq!(session.phase(), Phase::ResultDisplayed);
    }

    #[test]
    fn equals_on_fresh_session_returns_zero() {
        let mut session = CalculatorSession::new();
        let result = session.process_equals().unwrap();
        assert_eq!(result, BigDecimal::from(0));
        assert_eq!(session.current_input(), "0");
    }

    #[test]
    fn backspace_trims_and_resets() {
        let mut session = CalculatorSession::new();
        type_digits(&mut session, "12");
        assert_eq!(session.backspace(), "1");
        assert_eq!(session.backspace(), "0");
        assert_eq!(session.backspace(), "0");
    }

    #[test]
    fn handle_maps_events_to_responses() {
        let mut session = CalculatorSession::new();
        assert_eq!(
            session.handle(Event::Digit(digit('6'))),
            Response::Display("6".to_string())
        );
        let response = session.handle(Event::Operator(Operation::Multiply));
        assert_eq!(response.display_text(), "6");
        session.handle(Event::Digit(digit('7')));
        let response = session.handle(Event::Equals);
        assert_eq!(response.display_text(), "42");
        assert_eq!(
            session.handle(Event::Backspace),
            Response::Display("4".to_string())
        );
        assert_eq!(session.handle(Event::Clear), Response::Display("0".to_string()));
    }

    #[test]
    fn handle_reports_errors_as_results() {
        let mut session = CalculatorSession::new();
        session.handle(Event::Digit(digit('1')));
        session.handle(Event::Operator(Operation::Divide));
        session.handle(Event::Digit(digit('0')));
        let response = session.handle(Event::Equals);
        assert!(response.is_error());
        assert_eq!(response.display_text(), "Division by zero");
    }
}
