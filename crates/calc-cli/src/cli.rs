//! CLI argument definitions for the keypad calculator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "calc",
    version,
    about = "Keypad calculator - four functions, evaluated left to right",
    long_about = "A four-function keypad calculator driven by key sequences.\n\n\
                  Keys are typed as text: digits, '.', '+ - * /' (or '×' '÷'),\n\
                  '=' for equals, and named keys such as <enter>, <bs> and <esc>."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the platform config location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Feed a key sequence to a fresh calculator and print the final display.
    Eval(EvalArgs),

    /// Start an interactive session reading one key sequence per line.
    Repl,

    /// List the effective key bindings.
    Keys,

    /// Show or initialize the settings file.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct EvalArgs {
    /// Keys to press, e.g. "12+3=" or "5/0<enter>".
    #[arg(value_name = "KEYS")]
    pub keys: String,

    /// Print the calculation history after the final display.
    #[arg(long = "history")]
    pub history: bool,

    /// Output format for the final response.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the default settings to disk.
    #[arg(long = "init")]
    pub init: bool,

    /// Overwrite an existing settings file when used with --init.
    #[arg(long = "force", requires = "init")]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
