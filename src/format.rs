//! Human-readable ages in Portuguese: "2 anos, 3 meses e 1 dia",
//! "faz 5 dias", "daqui a 1 mês".

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::error;

use crate::age::{AgeBreakdown, diff};
use crate::instant::parse_instant;

/// Returned instead of an empty breakdown.
pub const TODAY: &str = "hoje";

const PAST_PREFIX: &str = "faz";
const FUTURE_PREFIX: &str = "daqui a";

struct Unit {
    singular: &'static str,
    plural: &'static str,
}

const YEAR: Unit = Unit {
    singular: "ano",
    plural: "anos",
};
const MONTH: Unit = Unit {
    singular: "mês",
    plural: "meses",
};
const WEEK: Unit = Unit {
    singular: "semana",
    plural: "semanas",
};
const DAY: Unit = Unit {
    singular: "dia",
    plural: "dias",
};

/// The original instants a breakdown was computed from, used to pick the
/// relative prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relative {
    /// The instant being described.
    pub reference: NaiveDateTime,
    /// The instant it is described from.
    pub on: NaiveDateTime,
}

impl Relative {
    fn prefix(&self) -> &'static str {
        if self.reference < self.on {
            PAST_PREFIX
        } else {
            FUTURE_PREFIX
        }
    }
}

/// Options for [`age_to_string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AgeOptions {
    /// Report only the largest non-zero unit.
    pub short: bool,
    /// Prepend "faz" or "daqui a".
    pub include_prefix: bool,
    /// Split whole weeks out of the days.
    pub include_weeks: bool,
}

/// Formats a breakdown, largest unit first.
///
/// Units are emitted in the order years, months, weeks, days, skipping
/// zeros. In `short` mode only the first non-zero unit is kept. When
/// `relative` is given the result is prefixed with "faz" (the reference
/// lies before `on`) or "daqui a" (otherwise).
pub fn format_age(age: &AgeBreakdown, short: bool, relative: Option<Relative>) -> String {
    if age.is_zero() {
        return TODAY.to_string();
    }

    let units = [
        (age.years, &YEAR),
        (age.months, &MONTH),
        (age.weeks().unwrap_or(0), &WEEK),
        (age.days, &DAY),
    ];

    let mut parts: Vec<String> = units
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| part(*n, unit))
        .collect();

    if short {
        parts.truncate(1);
    }

    let joined = join_parts(&parts);
    match relative {
        Some(relative) => format!("{} {joined}", relative.prefix()),
        None => joined,
    }
}

fn part(n: u32, unit: &Unit) -> String {
    let name = if n > 1 { unit.plural } else { unit.singular };
    format!("{n} {name}")
}

/// "A", "A e B", "A, B e C".
fn join_parts(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} e {second}"),
        [init @ .., last] => format!("{} e {last}", init.join(", ")),
    }
}

/// Describes how far `date` is from `on_date`.
///
/// Zero-day differences yield [`TODAY`].
pub fn age_to_string(date: NaiveDateTime, on_date: NaiveDateTime, options: &AgeOptions) -> String {
    let age = diff(date, on_date, options.include_weeks);
    if age.is_zero() {
        return TODAY.to_string();
    }

    let relative = options.include_prefix.then_some(Relative {
        reference: date,
        on: on_date,
    });
    format_age(&age, options.short, relative)
}

/// Like [`age_to_string`] for a date still in text form.
///
/// An unparseable date is logged and yields an empty string.
pub fn age_to_string_str(raw: &str, on_date: NaiveDateTime, options: &AgeOptions) -> String {
    match parse_instant(raw) {
        Ok(date) => age_to_string(date, on_date, options),
        Err(e) => {
            error!(input = raw, error = %e, "failed to compute age");
            String::new()
        }
    }
}
