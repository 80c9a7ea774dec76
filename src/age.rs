//! age.rs
//!
//! Calendar-aware difference between two instants, decomposed into
//! years, months, days and either weeks or a raw clock remainder.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so the borrowing rules are implemented manually:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month before the later date)
//!   • leap years
//!   • varying month lengths, including start days that do not exist in the
//!     borrowed month (Jan 31 → Mar 1)

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// Decomposed calendar difference between two instants.
///
/// `years`, `months` and `days` are always calendar-normalized. What follows
/// the days depends on how the breakdown was requested, see [`Detail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    #[serde(flatten)]
    pub detail: Detail,
}

/// The part of an [`AgeBreakdown`] below the day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Detail {
    /// Whole weeks split out of `days`; `days` is then 0–6.
    Weeks { weeks: u32 },
    /// Raw field differences of the wall-clock time. These are not
    /// borrow-normalized and may be negative.
    Clock {
        hours: i32,
        minutes: i32,
        seconds: i32,
    },
}

impl AgeBreakdown {
    pub fn weeks(&self) -> Option<u32> {
        match self.detail {
            Detail::Weeks { weeks } => Some(weeks),
            Detail::Clock { .. } => None,
        }
    }

    /// True when no calendar day has passed. The clock remainder is ignored.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0 && self.weeks().unwrap_or(0) == 0
    }
}

/// Computes the calendar difference between `a` and `b`.
///
/// The result does not depend on argument order: the difference is always
/// taken from the earlier instant to the later one.
pub fn diff(a: NaiveDateTime, b: NaiveDateTime, include_weeks: bool) -> AgeBreakdown {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };

    let mut years = later.year() - earlier.year();
    let mut months = later.month() as i32 - earlier.month() as i32;

    // Fix month underflow, including the "same month, day not reached yet" case
    if months < 0 || (months == 0 && later.day() < earlier.day()) {
        years -= 1;
        months += 12;
    }

    let mut days = match later.day().cmp(&earlier.day()) {
        Ordering::Greater => later.day() - earlier.day(),
        Ordering::Equal => 0,
        Ordering::Less => {
            months -= 1;

            // Borrow the month preceding `later`. A start day past the end of
            // that month is pinned to its last day.
            let (prev_year, prev_month) = previous_month(later.year(), later.month());
            let days_in_prev_month = days_in_month(prev_year, prev_month);
            days_in_prev_month.saturating_sub(earlier.day()) + later.day()
        }
    };

    // A day borrow can only push months below zero if the year borrow above
    // was skipped; keep the invariant regardless.
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let years = u32::try_from(years).unwrap_or(0);
    let months = months as u32;

    if include_weeks {
        let weeks = days / 7;
        days -= weeks * 7;
        return AgeBreakdown {
            years,
            months,
            days,
            detail: Detail::Weeks { weeks },
        };
    }

    AgeBreakdown {
        years,
        months,
        days,
        detail: Detail::Clock {
            hours: later.hour() as i32 - earlier.hour() as i32,
            minutes: later.minute() as i32 - earlier.minute() as i32,
            seconds: later.second() as i32 - earlier.second() as i32,
        },
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
