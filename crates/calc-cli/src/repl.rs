//! Line-oriented interactive session.
//!
//! Each input line is a key string; the screen text is printed after it.
//! Lines starting with `:` are meta commands.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::keypad::Keypad;

const PROMPT: &str = "> ";

const HELP: &str = "\
Type keys and press return, e.g. 12+3= or 5/0<enter>.
  :history  show recent calculations
  :help     show this message
  :quit     leave the session";

/// Run the session until `:quit` or end of input.
pub fn run_repl<R, W>(
    keypad: &mut Keypad,
    input: R,
    mut output: W,
    history_lines: usize,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("session started");
    writeln!(output, "{}", keypad.screen().text()).context("write display")?;
    write!(output, "{PROMPT}").context("write prompt")?;
    output.flush().context("flush output")?;

    for line in input.lines() {
        let line = line.context("read input line")?;
        let line = line.trim();
        match line {
            ":quit" | ":q" => break,
            ":history" => write_history(keypad, &mut output, history_lines)?,
            ":help" => writeln!(output, "{HELP}").context("write help")?,
            "" => {}
            meta if meta.starts_with(':') => {
                writeln!(output, "unknown command {meta} (try :help)").context("write error")?;
            }
            keys => {
                keypad.press_keys(keys, Instant::now());
                writeln!(output, "{}", keypad.screen().text()).context("write display")?;
            }
        }
        write!(output, "{PROMPT}").context("write prompt")?;
        output.flush().context("flush output")?;
    }

    writeln!(output).context("write newline")?;
    info!(
        calculations = keypad.session().history().len(),
        "session ended"
    );
    Ok(())
}

fn write_history<W: Write>(keypad: &Keypad, output: &mut W, limit: usize) -> Result<()> {
    let history = keypad.session().history();
    if history.is_empty() {
        writeln!(output, "(no calculations yet)").context("write history")?;
        return Ok(());
    }
    for entry in history.iter().take(limit) {
        writeln!(output, "  {entry}").context("write history")?;
    }
    Ok(())
}
