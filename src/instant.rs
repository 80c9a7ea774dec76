//! Parsing and canonical formatting of instants.
//!
//! Widgets keep their selection as text, so every comparison goes through
//! [`parse_instant`] first. Date-only input resolves to midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, WidgetError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted layouts, tried in order after the date-only form.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an instant from `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339.
///
/// RFC 3339 input keeps its wall-clock fields; the offset is dropped.
///
/// # Errors
/// Returns [`WidgetError::InvalidDate`] when no layout matches.
pub fn parse_instant(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WidgetError::InvalidDate("empty date".to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }

    for layout in DATE_TIME_LAYOUTS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(instant);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.naive_local())
        .map_err(|_| WidgetError::InvalidDate(format!("'{raw}' is not a recognized date")))
}

/// Canonical text of a selection: `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM` when
/// the widget shows time.
pub fn format_instant(instant: NaiveDateTime, with_time: bool) -> String {
    let format = if with_time {
        DATE_TIME_FORMAT
    } else {
        DATE_FORMAT
    };
    instant.format(format).to_string()
}
