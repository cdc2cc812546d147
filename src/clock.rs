//! Wall-clock display
//!
//! Formats "now" for the dashboard header, e.g.
//! `Sunday, October 18, 2026 at 09:48:05 AM`.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Default strftime pattern for the header clock
pub const DEFAULT_CLOCK_FORMAT: &str = "%A, %B %-d, %Y at %I:%M:%S %p";

/// Whether chrono understands every specifier in `pattern`
pub fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Format a timestamp with the given strftime pattern
///
/// A pattern chrono cannot format falls back to [`DEFAULT_CLOCK_FORMAT`].
pub fn format_time<Tz>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut text = String::new();
    if write!(text, "{}", now.format(pattern)).is_ok() {
        return text;
    }

    tracing::warn!(pattern, "Invalid clock format, using default");
    now.format(DEFAULT_CLOCK_FORMAT).to_string()
}
