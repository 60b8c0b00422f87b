//! Calculator session state.
//!
//! A [`CalculatorSession`] is owned by exactly one caller and mutated through
//! `&mut self` transitions (see the `machine` module). It holds:
//!
//! - the operand text being typed (`current_input`, never empty)
//! - the left operand of the running chain
//! - the operator waiting for its right operand
//! - whether the next digit starts a fresh operand
//! - a bounded history of completed calculations

use std::fmt;

use bigdecimal::BigDecimal;
use calc_model::Operation;

use crate::history::History;

/// Display text of a fresh session.
pub const INITIAL_INPUT: &str = "0";

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    pub(crate) current_input: String,
    pub(crate) first_operand: Option<BigDecimal>,
    pub(crate) pending_operation: Option<Operation>,
    pub(crate) awaiting_new_number: bool,
    pub(crate) history: History,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::with_history(History::default())
    }

    /// Create a session around an existing (usually empty) history buffer.
    pub fn with_history(history: History) -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            first_operand: None,
            pending_operation: None,
            awaiting_new_number: true,
            history,
        }
    }

    /// The operand text as typed, or the last committed result.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn first_operand(&self) -> Option<&BigDecimal> {
        self.first_operand.as_ref()
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    pub fn awaiting_new_number(&self) -> bool {
        self.awaiting_new_number
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Conceptual phase of the state machine, derived from the fields.
    pub fn phase(&self) -> Phase {
        match (self.pending_operation, self.awaiting_new_number) {
            (Some(_), true) => Phase::OperatorChosen,
            (Some(_), false) => Phase::EnteringSecondOperand,
            (None, true) if self.first_operand.is_some() => Phase::ResultDisplayed,
            (None, _) => Phase::EnteringFirstOperand,
        }
    }

    /// Reset the calculation to construction defaults.
    ///
    /// History entries are kept; the history buffer is not reallocated.
    pub fn clear(&mut self) {
        self.current_input.clear();
        self.current_input.push_str(INITIAL_INPUT);
        self.first_operand = None;
        self.pending_operation = None;
        self.awaiting_new_number = true;
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase of the calculation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No operator chosen yet.
    EnteringFirstOperand,
    /// Operator chosen, waiting for the right operand.
    OperatorChosen,
    /// Digits are being appended to the right operand.
    EnteringSecondOperand,
    /// Equals was pressed; the display shows the committed result.
    ResultDisplayed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::EnteringFirstOperand => "entering-first-operand",
            Phase::OperatorChosen => "operator-chosen",
            Phase::EnteringSecondOperand => "entering-second-operand",
            Phase::ResultDisplayed => "result-displayed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
