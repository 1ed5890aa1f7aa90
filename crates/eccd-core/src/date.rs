//! Fail-soft calendar date parsing.

use jiff::civil::Date;
use tracing::debug;

/// Parse an upstream date string into a civil date.
///
/// Accepts `YYYY-MM-DD` as well as ISO-8601 timestamps whose first ten
/// characters are such a date (`2024-02-10T00:00:00.000Z`). Missing, blank
/// or unparseable input yields `None`.
pub fn parse_iso_date(value: Option<&str>) -> Option<Date> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = raw.parse::<Date>() {
        return Some(date);
    }

    match raw.get(..10).map(str::parse::<Date>) {
        Some(Ok(date)) => Some(date),
        _ => {
            debug!(value = raw, "unparseable date, treating as missing");
            None
        }
    }
}
