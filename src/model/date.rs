//! Calendar-checked release dates
//!
//! Validation is the fixed rule from FORMAT.md: year in [1900, 2100],
//! month in [1, 12], day within the month, February 29 only in leap
//! years. Chronological order is (year, month, day), which the derived
//! `Ord` provides via field declaration order.

use std::fmt;

use serde::Serialize;

/// Release date of a repository.
///
/// Field order matters: the derived `Ord` compares year, then month,
/// then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReleaseDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl ReleaseDate {
    /// Smallest accepted year
    pub const MIN_YEAR: i32 = 1900;
    /// Largest accepted year
    pub const MAX_YEAR: i32 = 2100;

    /// Creates a date without validating it. Call `is_valid` before
    /// admitting the value anywhere that requires a real calendar date.
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Calendar-correct validation, including the leap-year rule.
    pub fn is_valid(&self) -> bool {
        if self.year < Self::MIN_YEAR || self.year > Self::MAX_YEAR {
            return false;
        }
        if self.month < 1 || self.month > 12 {
            return false;
        }
        self.day >= 1 && self.day <= days_in_month(self.month, self.year)
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Leap years: divisible by 4 and (not by 100, or by 400).
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
