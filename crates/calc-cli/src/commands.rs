use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::info;

use calc_cli::keypad::Keypad;
use calc_cli::repl;
use calc_cli::router::KeyRouter;
use calc_cli::settings::{Settings, init_settings, load_settings_from, resolve_path, to_toml};
use calc_model::{CalculationResult, Response};

use crate::cli::{ConfigArgs, EvalArgs, OutputFormatArg};
use crate::summary::{bindings_table, history_table};

/// Machine-readable outcome of `calc eval --format json`.
#[derive(Serialize)]
struct EvalReport<'a> {
    display: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<&'a str>>,
}

/// Feed `args.keys` to a fresh keypad. Returns the process exit code.
pub fn run_eval(args: &EvalArgs, settings: &Settings) -> Result<i32> {
    let mut keypad = Keypad::from_settings(settings)?;
    let last = keypad.press_keys(&args.keys, Instant::now());
    let failed = last.as_ref().is_some_and(Response::is_error);
    let history_lines = settings.display.history_lines;
    info!(keys = %args.keys, failed, "evaluated key sequence");

    match args.format {
        OutputFormatArg::Text => {
            println!("{}", keypad.screen().text());
            if args.history {
                println!("{}", history_table(keypad.session().history(), history_lines));
            }
        }
        OutputFormatArg::Json => {
            let result = match &last {
                Some(Response::Result(result)) => Some(result),
                _ => None,
            };
            let history = args.history.then(|| {
                keypad
                    .session()
                    .history()
                    .iter()
                    .take(history_lines)
                    .collect()
            });
            let report = EvalReport {
                display: keypad.screen().text(),
                result,
                history,
            };
            let json = serde_json::to_string_pretty(&report).context("serialize result")?;
            println!("{json}");
        }
    }
    Ok(i32::from(failed))
}

pub fn run_repl(settings: &Settings) -> Result<()> {
    let mut keypad = Keypad::from_settings(settings)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run_repl(
        &mut keypad,
        stdin.lock(),
        stdout.lock(),
        settings.display.history_lines,
    )
}

pub fn run_keys(settings: &Settings) -> Result<()> {
    let router = KeyRouter::new(&settings.keys).context("build key bindings")?;
    println!("{}", bindings_table(&router));
    Ok(())
}

pub fn run_config(args: &ConfigArgs, override_path: Option<&Path>) -> Result<()> {
    let path =
        resolve_path(override_path).ok_or_else(|| anyhow!("could not determine settings path"))?;
    if args.init {
        init_settings(&path, args.force)?;
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }
    let settings = load_settings_from(&path);
    println!("# {}", path.display());
    print!("{}", to_toml(&settings)?);
    Ok(())
}
