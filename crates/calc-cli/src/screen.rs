//! Display text with a timed error banner.
//!
//! An error replaces the display and holds it until the banner expires or a
//! clear arrives; updates in between are dropped. Time is passed in by the
//! caller so expiry is deterministic under test.

use std::time::{Duration, Instant};

use calc_model::Response;

const ERROR_PREFIX: &str = "Error";
const BLANK: &str = "0";

#[derive(Debug, Clone)]
pub struct Screen {
    text: String,
    error_since: Option<Instant>,
    timeout: Duration,
}

impl Screen {
    pub fn new(timeout: Duration) -> Self {
        Self {
            text: BLANK.to_string(),
            error_since: None,
            timeout,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn in_error(&self) -> bool {
        self.error_since.is_some()
    }

    /// Render one core response at `now`.
    pub fn render(&mut self, response: &Response, now: Instant) {
        self.expire(now);
        if response.is_error() {
            self.show_error(&response.display_text(), now);
        } else {
            self.update(&response.display_text());
        }
    }

    /// Replace the display unless an error banner is up.
    pub fn update(&mut self, text: &str) {
        if self.error_since.is_none() {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    /// Show `message` as the banner; a newer error restarts the timer.
    pub fn show_error(&mut self, message: &str, now: Instant) {
        self.text.clear();
        self.text.push_str(message);
        self.error_since = Some(now);
    }

    /// Drop the banner and reset the display.
    pub fn clear(&mut self) {
        self.error_since = None;
        self.text.clear();
        self.text.push_str(BLANK);
    }

    /// Lift an expired banner. Returns `true` when one was lifted.
    ///
    /// Text that still reads as an error is reset to `0`; any other message
    /// stays until the next update.
    pub fn expire(&mut self, now: Instant) -> bool {
        let Some(since) = self.error_since else {
            return false;
        };
        if now.saturating_duration_since(since) < self.timeout {
            return false;
        }
        self.error_since = None;
        if self.text.starts_with(ERROR_PREFIX) {
            self.clear();
        }
        true
    }
}
