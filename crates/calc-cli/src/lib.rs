//! Terminal front end for the keypad calculator.

pub mod keypad;
pub mod logging;
pub mod repl;
pub mod router;
pub mod screen;
pub mod settings;
