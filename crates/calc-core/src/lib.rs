//! Calculation state machine.
//!
//! Turns discrete key events into a running, left-to-right calculation:
//! operands are validated by `calc-validate`, evaluated by `calc-engine`, and
//! completed calculations are logged to a bounded history.

mod history;
mod machine;
mod session;

pub use history::{HISTORY_CAPACITY, History};
pub use session::{CalculatorSession, INITIAL_INPUT, Phase};
