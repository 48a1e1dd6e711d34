//! Locale string tables
//!
//! Every user-visible string lives in one [`Strings`] table per locale. Danish
//! is the default; English exists mostly so the table has a second key.

use crate::bucket::PhaseBucket;
use crate::calendar::CalendarDate;
use crate::error::DomainError;
use chrono::Weekday;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Language used for rendered text
///
/// Command-line flags and the config file both go through [`Locale::parse`],
/// so they accept the same spellings. It serializes as its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Danish (da-DK)
    #[default]
    Danish,
    /// English (en)
    English,
}

/// Static strings for one locale.
///
/// Templates use `{n}` for a day count and `{date}` for a formatted date.
struct Strings {
    phase_names: [&'static str; 8],
    verdict_yes: &'static str,
    verdict_no: &'static str,
    full_tonight: &'static str,
    next_today: &'static str,
    next_one_day: &'static str,
    next_many_days: &'static str,
    last_today: &'static str,
    last_yesterday: &'static str,
    last_many_days: &'static str,
    upcoming_columns: [&'static str; 4],
    upcoming_empty: &'static str,
    months: [&'static str; 12],
    weekdays: [&'static str; 7],
}

const DANISH: Strings = Strings {
    phase_names: [
        "Nymåne",
        "Tiltagende månesigel",
        "Første kvarter",
        "Tiltagende måne",
        "Fuldmåne",
        "Aftagende måne",
        "Sidste kvarter",
        "Aftagende månesigel",
    ],
    verdict_yes: "JA! 🎉",
    verdict_no: "NEJ",
    full_tonight: "Det er fuldmåne i nat!",
    // a zero-day distance rounds down from less than half a day, shown as tomorrow
    next_today: "Næste fuldmåne er i morgen!",
    next_one_day: "Næste fuldmåne er om 1 dag.",
    next_many_days: "Næste fuldmåne er om cirka {n} dage",
    last_today: "Sidste fuldmåne: I dag!",
    last_yesterday: "Sidste fuldmåne: I går ({date})",
    last_many_days: "Sidste fuldmåne: {date} ({n} dage siden)",
    upcoming_columns: ["#", "Dato", "", "Dage"],
    upcoming_empty: "Ingen datoer ønsket.",
    months: [
        "januar", "februar", "marts", "april", "maj", "juni", "juli", "august", "september",
        "oktober", "november", "december",
    ],
    weekdays: ["mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag"],
};

const ENGLISH: Strings = Strings {
    phase_names: [
        "New Moon",
        "Waxing Crescent",
        "First Quarter",
        "Waxing Gibbous",
        "Full Moon",
        "Waning Gibbous",
        "Last Quarter",
        "Waning Crescent",
    ],
    verdict_yes: "YES! 🎉",
    verdict_no: "NO",
    full_tonight: "It's a full moon tonight!",
    next_today: "The next full moon is tomorrow!",
    next_one_day: "The next full moon is in 1 day.",
    next_many_days: "The next full moon is in about {n} days",
    last_today: "Last full moon: Today!",
    last_yesterday: "Last full moon: Yesterday ({date})",
    last_many_days: "Last full moon: {date} ({n} days ago)",
    upcoming_columns: ["#", "Date", "", "Days"],
    upcoming_empty: "No dates requested.",
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    weekdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
};

impl Locale {
    /// Short language tag
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Danish => "da",
            Locale::English => "en",
        }
    }

    /// Parse a language tag or name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "da" | "da-dk" | "da_dk" | "danish" | "dansk" => Some(Locale::Danish),
            "en" | "en-us" | "en-gb" | "en_us" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    fn strings(&self) -> &'static Strings {
        match self {
            Locale::Danish => &DANISH,
            Locale::English => &ENGLISH,
        }
    }

    /// Display name of a phase bucket
    pub fn phase_name(&self, bucket: PhaseBucket) -> &'static str {
        let index = PhaseBucket::ALL
            .iter()
            .position(|b| *b == bucket)
            .unwrap_or(0);
        self.strings().phase_names[index]
    }

    /// Yes/no answer to "is it full moon tonight"
    pub fn verdict(&self, is_full_moon: bool) -> &'static str {
        let strings = self.strings();
        if is_full_moon {
            strings.verdict_yes
        } else {
            strings.verdict_no
        }
    }

    /// Detail line shown on a full-moon night
    pub fn full_moon_tonight(&self) -> &'static str {
        self.strings().full_tonight
    }

    /// Detail line counting down to the next full moon
    pub fn next_full_moon_text(&self, days_until: i64) -> String {
        let strings = self.strings();
        match days_until {
            0 => strings.next_today.to_string(),
            1 => strings.next_one_day.to_string(),
            n => strings.next_many_days.replace("{n}", &n.to_string()),
        }
    }

    /// Line describing when the last full moon was
    pub fn last_full_moon_text(&self, days_since: i64, date: &CalendarDate) -> String {
        let strings = self.strings();
        let date_text = self.long_date(date, false);
        match days_since {
            0 => strings.last_today.to_string(),
            1 => strings.last_yesterday.replace("{date}", &date_text),
            n => strings
                .last_many_days
                .replace("{date}", &date_text)
                .replace("{n}", &n.to_string()),
        }
    }

    /// Column headers for the upcoming full moon table
    pub fn upcoming_columns(&self) -> [&'static str; 4] {
        self.strings().upcoming_columns
    }

    /// Shown when an upcoming listing has no rows
    pub fn upcoming_empty(&self) -> &'static str {
        self.strings().upcoming_empty
    }

    /// Long-form date, e.g. `fredag den 16. oktober 2026` or `16. oktober 2026`.
    ///
    /// Dates outside the representable range fall back to ISO form.
    pub fn long_date(&self, date: &CalendarDate, with_weekday: bool) -> String {
        let Some(weekday) = date.weekday() else {
            return date.to_string();
        };
        let CalendarDate { year, month, day } = date.normalized();
        let strings = self.strings();
        let month = strings.months[month as usize - 1];
        let weekday = strings.weekdays[weekday_index(weekday)];

        match (self, with_weekday) {
            (Locale::Danish, true) => format!("{} den {}. {} {}", weekday, day, month, year),
            (Locale::Danish, false) => format!("{}. {} {}", day, month, year),
            (Locale::English, true) => format!("{}, {} {}, {}", weekday, month, day, year),
            (Locale::English, false) => format!("{} {}, {}", month, day, year),
        }
    }
}

fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}
