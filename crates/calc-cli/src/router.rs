//! Raw key parsing and routing to calculator events.
//!
//! Key strings are read left to right. Named keys are written `<enter>`,
//! `<bs>` and `<esc>`; whitespace separates keys and is skipped; every other
//! character is one key. A `<` that does not open a known name is the
//! literal `<` key.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use calc_model::{Digit, Event, Operation};

use crate::settings::KeySettings;

/// One physical key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RawKey {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

impl RawKey {
    /// Resolve a named key such as `enter` (without brackets).
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" | "cr" => Some(Self::Enter),
            "bs" | "backspace" => Some(Self::Backspace),
            "esc" | "escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Parse a binding from settings: exactly one key.
    pub fn parse_binding(text: &str) -> Result<Self> {
        let keys = parse_keys(text);
        match keys.as_slice() {
            [key] => Ok(*key),
            _ => bail!("key binding {text:?} must name exactly one key"),
        }
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKey::Char(ch) => write!(f, "{ch}"),
            RawKey::Enter => f.write_str("<enter>"),
            RawKey::Backspace => f.write_str("<bs>"),
            RawKey::Escape => f.write_str("<esc>"),
        }
    }
}

/// Split a key string into individual key presses.
pub fn parse_keys(text: &str) -> Vec<RawKey> {
    let mut keys = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        rest = &rest[ch.len_utf8()..];
        if ch.is_whitespace() {
            continue;
        }
        if ch == '<'
            && let Some(end) = rest.find('>')
            && let Some(key) = RawKey::named(&rest[..end])
        {
            keys.push(key);
            rest = &rest[end + 1..];
            continue;
        }
        keys.push(RawKey::Char(ch));
    }
    keys
}

/// Keypad action a key can be bound to, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Digit,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    Backspace,
}

impl Action {
    fn of(event: Event) -> Self {
        match event {
            Event::Digit(_) => Action::Digit,
            Event::Operator(Operation::Add) => Action::Add,
            Event::Operator(Operation::Subtract) => Action::Subtract,
            Event::Operator(Operation::Multiply) => Action::Multiply,
            Event::Operator(Operation::Divide) => Action::Divide,
            Event::Equals => Action::Equals,
            Event::Clear => Action::Clear,
            Event::Backspace => Action::Backspace,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Digit => "Digit",
            Action::Add => "Add",
            Action::Subtract => "Subtract",
            Action::Multiply => "Multiply",
            Action::Divide => "Divide",
            Action::Equals => "Equals",
            Action::Clear => "Clear",
            Action::Backspace => "Backspace",
        }
    }
}

/// Maps raw keys to calculator events.
#[derive(Debug, Clone)]
pub struct KeyRouter {
    bindings: BTreeMap<RawKey, Event>,
}

impl KeyRouter {
    /// Build a router from fixed keypad keys plus the configured bindings.
    ///
    /// Fails when a binding is not a single key or when one key would
    /// trigger two different events.
    pub fn new(keys: &KeySettings) -> Result<Self> {
        let mut router = Self {
            bindings: BTreeMap::new(),
        };
        for value in 0..=9 {
            if let Some(digit) = Digit::from_value(value) {
                router.bind(RawKey::Char(digit.as_char()), Event::Digit(digit))?;
            }
        }
        router.bind(RawKey::Char('.'), Event::Digit(Digit::POINT))?;
        for operation in Operation::ALL {
            router.bind(RawKey::Char(operation.symbol()), Event::Operator(operation))?;
        }
        router.bind(RawKey::Char('×'), Event::Operator(Operation::Multiply))?;
        router.bind(RawKey::Char('÷'), Event::Operator(Operation::Divide))?;

        let configured = [
            (&keys.equals, Event::Equals),
            (&keys.clear, Event::Clear),
            (&keys.backspace, Event::Backspace),
        ];
        for (names, event) in configured {
            for name in names {
                router.bind(RawKey::parse_binding(name)?, event)?;
            }
        }
        Ok(router)
    }

    fn bind(&mut self, key: RawKey, event: Event) -> Result<()> {
        match self.bindings.insert(key, event) {
            Some(previous) if previous != event => bail!(
                "key {key} is bound to both {} and {}",
                Action::of(previous).label(),
                Action::of(event).label()
            ),
            _ => Ok(()),
        }
    }

    /// Event for `key`, or `None` when the key is unbound.
    pub fn route(&self, key: RawKey) -> Option<Event> {
        self.bindings.get(&key).copied()
    }

    /// Bound keys grouped by action, in keypad order.
    pub fn bindings(&self) -> Vec<(Action, Vec<RawKey>)> {
        let mut grouped: BTreeMap<Action, Vec<RawKey>> = BTreeMap::new();
        for (key, event) in &self.bindings {
            grouped.entry(Action::of(*event)).or_default().push(*key);
        }
        grouped.into_iter().collect()
    }
}
