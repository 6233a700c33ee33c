//! Calendar month addressing used by the aggregator and month navigation.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month: a year plus a zero-based month (`0` = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Builds a period from a year and zero-based month. Returns `None` when `month > 11`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    /// The month that contains `instant` as observed in the instant's own time zone.
    pub fn containing<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves by `delta` calendar months, carrying across year boundaries.
    ///
    /// Saturates at the first and last month representable with an `i32` year.
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        match i32::try_from(index.div_euclid(12)) {
            Ok(year) => Self {
                year,
                month: index.rem_euclid(12) as u32,
            },
            Err(_) if index < 0 => Self {
                year: i32::MIN,
                month: 0,
            },
            Err(_) => Self {
                year: i32::MAX,
                month: 11,
            },
        }
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    /// Returns `true` when `instant`, converted into `tz`, falls inside this month.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Utc>, tz: &Tz) -> bool {
        Self::containing(&instant.with_timezone(tz)) == *self
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn period(year: i32, month: u32) -> MonthPeriod {
        MonthPeriod::new(year, month).unwrap()
    }

    #[test]
    fn rejects_month_twelve() {
        assert!(MonthPeriod::new(2024, 12).is_none());
        assert!(MonthPeriod::new(2024, 11).is_some());
    }

    #[test]
    fn shift_wraps_year_boundaries() {
        assert_eq!(period(2024, 0).previous(), period(2023, 11));
        assert_eq!(period(2024, 11).next(), period(2025, 0));
        assert_eq!(period(2024, 5).shift(-18), period(2022, 11));
        assert_eq!(period(2024, 5).shift(30), period(2026, 11));
    }

    #[test]
    fn shift_saturates_at_the_year_range() {
        assert_eq!(period(i32::MAX, 11).next(), period(i32::MAX, 11));
        assert_eq!(period(i32::MAX, 10).shift(5), period(i32::MAX, 11));
        assert_eq!(period(i32::MIN, 0).previous(), period(i32::MIN, 0));
        assert_eq!(period(i32::MIN, 3).shift(i32::MIN), period(i32::MIN, 0));
    }

    #[test]
    fn previous_then_next_is_identity() {
        for month in 0..12 {
            let start = period(2024, month);
            assert_eq!(start.previous().next(), start);
        }
    }

    #[test]
    fn label_uses_full_month_name() {
        assert_eq!(period(2024, 0).to_string(), "January 2024");
        assert_eq!(period(1999, 11).to_string(), "December 1999");
    }

    #[test]
    fn contains_respects_time_zone() {
        // 2024-01-31 23:30 UTC is already February at UTC+2.
        let instant = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert!(period(2024, 0).contains(&instant, &Utc));
        assert!(!period(2024, 0).contains(&instant, &plus_two));
        assert!(period(2024, 1).contains(&instant, &plus_two));
    }
}
