//! Command implementations.

pub mod config;
pub mod show;
pub mod upcoming;

pub use self::config::execute_config;
pub use self::show::execute_show;
pub use self::upcoming::execute_upcoming;

use crate::clock::{self, Clock};
use crate::output::Formatter;
use chrono_tz::Tz;
use fuldmaane_domain::{CalendarDate, Locale};

/// Everything a command needs besides its own arguments.
pub struct Context<'a> {
    /// Renders results for the chosen target
    pub formatter: Formatter,
    /// Language of rendered text
    pub locale: Locale,
    /// Timezone that decides the current date
    pub timezone: Tz,
    /// Source of "now"
    pub clock: &'a dyn Clock,
}

impl Context<'_> {
    /// Civil date of the current instant in the configured timezone.
    pub fn today(&self) -> CalendarDate {
        clock::today_in(self.clock, self.timezone)
    }

    /// The explicit date if given, otherwise today.
    pub fn date_or_today(&self, date: Option<CalendarDate>) -> CalendarDate {
        date.unwrap_or_else(|| self.today())
    }
}
