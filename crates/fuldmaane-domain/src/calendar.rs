//! Civil calendar dates.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A civil (Gregorian) calendar date.
///
/// Fields are stored as given and are *not* validated: the phase arithmetic
/// accepts whatever it is handed and drifts accordingly. Calendar arithmetic
/// normalizes overflowing values the way a civil rollover does, so day 0 of
/// March is the last day of February and month 13 is January of the next year.
/// Equality and ordering compare the raw fields; call [`CalendarDate::normalized`]
/// first when comparing dates that may overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    /// Proleptic Gregorian year
    pub year: i32,
    /// Month of year, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
}

impl CalendarDate {
    /// Create a date from its parts without validation.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Normalize into a `chrono` date, rolling overflowing months and days.
    ///
    /// Returns `None` only when the result falls outside the range `chrono`
    /// can represent.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = TimeDelta::try_days(i64::from(self.day) - 1)?;
        first.checked_add_signed(offset)
    }

    /// The same day with month and day rolled into range.
    ///
    /// Dates outside the representable range are returned unchanged.
    pub fn normalized(&self) -> Self {
        self.to_naive_date().map(Self::from).unwrap_or(*self)
    }

    /// Shift by a signed number of days.
    ///
    /// Saturates at the earliest/latest representable date instead of failing.
    pub fn add_days(&self, days: i64) -> Self {
        let base = self.to_naive_date().unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        });
        let shifted = TimeDelta::try_days(days)
            .and_then(|delta| base.checked_add_signed(delta))
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
        Self::from(shifted)
    }

    /// Shift back by a number of days.
    pub fn sub_days(&self, days: i64) -> Self {
        self.add_days(-days)
    }

    /// Whole days from `earlier` to `self` (negative if `earlier` is later).
    pub fn days_since(&self, earlier: &CalendarDate) -> i64 {
        match (self.to_naive_date(), earlier.to_naive_date()) {
            (Some(this), Some(that)) => this.signed_duration_since(that).num_days(),
            _ => (crate::phase::compute_julian_date(self)
                - crate::phase::compute_julian_date(earlier))
            .round() as i64,
        }
    }

    /// Day of the week, if the date is representable.
    pub fn weekday(&self) -> Option<Weekday> {
        self.to_naive_date().map(|d| d.weekday())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|_| DomainError::InvalidDate(s.to_string()))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
