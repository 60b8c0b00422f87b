//! A calculator session wired to a key router and a screen.

use std::time::{Duration, Instant};

use anyhow::Result;
use calc_core::CalculatorSession;
use calc_model::{CalcError, CalculationResult, Event, Response};
use tracing::warn;

use crate::router::{KeyRouter, RawKey, parse_keys};
use crate::screen::Screen;
use crate::settings::Settings;

#[derive(Debug)]
pub struct Keypad {
    session: CalculatorSession,
    router: KeyRouter,
    screen: Screen,
}

impl Keypad {
    pub fn new(router: KeyRouter, error_timeout: Duration) -> Self {
        Self {
            session: CalculatorSession::new(),
            router,
            screen: Screen::new(error_timeout),
        }
    }

    /// Build a keypad from the key and display settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let router = KeyRouter::new(&settings.keys)?;
        Ok(Self::new(router, settings.display.error_timeout()))
    }

    pub fn session(&self) -> &CalculatorSession {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Press one key at `now` and render the response.
    ///
    /// Unbound keys leave the session untouched and answer `Invalid input`.
    pub fn press(&mut self, key: RawKey, now: Instant) -> Response {
        let response = match self.router.route(key) {
            Some(Event::Clear) => {
                self.screen.clear();
                self.session.handle(Event::Clear)
            }
            Some(event) => self.session.handle(event),
            None => {
                warn!(%key, "unbound key");
                let error = CalcError::InvalidInput {
                    key: key.to_string(),
                };
                Response::Result(CalculationResult::error(&error))
            }
        };
        self.screen.render(&response, now);
        response
    }

    /// Press every key in `keys`, returning the last response.
    pub fn press_keys(&mut self, keys: &str, now: Instant) -> Option<Response> {
        let mut last = None;
        for key in parse_keys(keys) {
            last = Some(self.press(key, now));
        }
        last
    }
}
