//! Shared calculator types: operations, results, key events and errors.

pub mod error;
pub mod event;
pub mod operation;
pub mod result;

pub use error::{CalcError, ErrorKind, Result};
pub use event::{Digit, Event, Response};
pub use operation::Operation;
pub use result::{CalculationResult, format_plain};
