//! Wall-clock access and timezone resolution.
//!
//! The domain crate never reads the clock. Commands ask a [`Clock`] for the
//! current instant and resolve it to a civil date in a named timezone, so tests
//! can pin "now" with a [`FixedClock`].

use crate::error::{CliError, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use fuldmaane_domain::CalendarDate;

/// Source of the current instant.
pub trait Clock {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Civil date of the clock's current instant in `tz`.
pub fn today_in(clock: &dyn Clock, tz: Tz) -> CalendarDate {
    CalendarDate::from(clock.now().with_timezone(&tz).date_naive())
}

/// Look up an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| CliError::Timezone(name.to_string()))
}
