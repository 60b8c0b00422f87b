//! Interactive sessions driven through in-memory input and output.

use std::io::Cursor;
use std::time::{Duration, Instant};

use calc_cli::keypad::Keypad;
use calc_cli::repl::run_repl;
use calc_cli::router::KeyRouter;
use calc_cli::settings::{KeySettings, Settings, load_settings_from};

fn session_output(input: &str, history_lines: usize) -> Vec<String> {
    let mut keypad = Keypad::from_settings(&Settings::default()).expect("default keypad");
    let mut output = Vec::new();
    run_repl(&mut keypad, Cursor::new(input), &mut output, history_lines).expect("run repl");
    String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(|line| line.trim_start_matches("> ").to_string())
        .collect()
}

#[test]
fn session_chains_and_reports_history() {
    let lines = session_output("12+3=\n*2=\n:history\n5/0=\nc\n:bogus\n:quit\n", 5);
    assert_eq!(
        lines,
        vec![
            "0",
            "15",
            "30",
            "  15 * 2 = 30",
            "  12 + 3 = 15",
            "Division by zero",
            "0",
            "unknown command :bogus (try :help)",
            "",
        ]
    );
}

#[test]
fn history_respects_line_limit() {
    let lines = session_output("1+1=\n+1=\n+1=\n:history\n", 2);
    assert_eq!(&lines[4..6], ["  3 + 1 = 4", "  2 + 1 = 3"]);
    assert_eq!(lines[6], "");
}

#[test]
fn empty_history_is_announced() {
    let lines = session_output(":history\n", 5);
    assert_eq!(lines[1], "(no calculations yet)");
}

#[test]
fn end_of_input_ends_session() {
    let lines = session_output("7*6<enter>", 5);
    assert_eq!(lines, vec!["0", "42", ""]);
}

#[test]
fn unbound_keys_show_invalid_input() {
    let lines = session_output("12x\n", 5);
    assert_eq!(lines[1], "Invalid input");
}

#[test]
fn banner_expires_on_injected_clock() {
    let settings = Settings::default();
    let mut keypad = Keypad::from_settings(&settings).expect("default keypad");
    let start = Instant::now();

    keypad.press_keys("9/0=", start);
    keypad.press_keys("<bs>3", start + Duration::from_millis(100));
    assert_eq!(keypad.screen().text(), "Division by zero");

    let later = start + settings.display.error_timeout();
    let response = keypad.press_keys("=", later).expect("equals response");
    assert_eq!(response.display_text(), "3");
    assert_eq!(keypad.screen().text(), "3");
}

#[test]
fn custom_bindings_from_settings_file() {
    let dir = std::env::temp_dir().join(format!("calc-repl-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join("settings.toml");
    std::fs::write(
        &path,
        "[keys]\nequals = [\"<enter>\", \"=\", \"x\"]\n\n[display]\nerror_timeout_ms = 50\n",
    )
    .expect("write settings");

    let settings = load_settings_from(&path);
    std::fs::remove_dir_all(&dir).expect("remove scratch dir");
    assert_eq!(settings.keys.clear, KeySettings::default().clear);
    assert_eq!(settings.display.error_timeout_ms, 50);

    let mut keypad = Keypad::from_settings(&settings).expect("custom keypad");
    let response = keypad.press_keys("4*5x", Instant::now()).expect("response");
    assert_eq!(response.display_text(), "20");

    let router = KeyRouter::new(&settings.keys).expect("router");
    let (_, equals) = router
        .bindings()
        .into_iter()
        .find(|(action, _)| action.label() == "Equals")
        .expect("equals row");
    assert_eq!(equals.len(), 3);
}
