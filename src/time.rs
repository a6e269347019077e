use std::fmt::Write;

use chrono::{Local, NaiveDateTime};

/// Long date followed by a medium-length time, e.g. `June 1, 2024 at 5:00:00 PM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%B %-d, %Y at %-I:%M:%S %p";

/// Clock abstracts access to the current wall-clock time so forms remain
/// deterministic in tests.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Real-time clock backed by the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Renders creation timestamps for new meals.
#[derive(Debug, Clone)]
pub struct CreationTimeFormatter {
    pattern: String,
}

impl CreationTimeFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Formats `moment`; a pattern chrono cannot render falls back to
    /// [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn format(&self, moment: NaiveDateTime) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", moment.format(&self.pattern)).is_ok() {
            return rendered;
        }
        tracing::warn!(pattern = %self.pattern, "Invalid timestamp pattern; using default.");
        moment.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}

impl Default for CreationTimeFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}
