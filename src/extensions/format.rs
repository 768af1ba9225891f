use std::fmt::Write;

use crate::core::unix_seconds_to_datetime;

/// Caller-supplied conversion of an axis value into display text.
pub type ValueFormatter = Box<dyn Fn(f64) -> String>;

/// Plain numeric display (`3.0` prints as `3`).
#[must_use]
pub fn default_formatter() -> ValueFormatter {
    Box::new(|value| value.to_string())
}

/// Formats unix-seconds values with a chrono `strftime` pattern in UTC.
///
/// Values chrono cannot represent, and patterns it cannot render, fall back
/// to the numeric display.
#[must_use]
pub fn unix_seconds_formatter(pattern: impl Into<String>) -> ValueFormatter {
    let pattern = pattern.into();
    Box::new(move |value| {
        let Some(time) = unix_seconds_to_datetime(value) else {
            return value.to_string();
        };
        let mut out = String::new();
        match write!(out, "{}", time.format(&pattern)) {
            Ok(()) => out,
            Err(_) => value.to_string(),
        }
    })
}
