//! Moon report - the view model a renderer writes to its target

use crate::bucket::PhaseBucket;
use crate::calendar::CalendarDate;
use crate::locale::Locale;
use crate::phase;
use serde::Serialize;

/// Answer to "is it full moon tonight"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Phase is inside the full-moon window
    Yes,
    /// Any other night
    No,
}

impl Verdict {
    /// Lowercase identifier, also used as a style class
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
        }
    }
}

/// Everything a page shows for one date.
///
/// Built by a pure function from a date (or a date and a precomputed phase);
/// rendering lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonReport {
    /// Date the report describes
    pub date: CalendarDate,
    /// Language of the text fields
    pub locale: Locale,
    /// Phase fraction in [0, 1)
    pub phase: f64,
    /// Named segment of the cycle
    pub bucket: PhaseBucket,
    /// Moon glyph
    pub emoji: &'static str,
    /// Localized bucket name
    pub phase_name: &'static str,
    /// Yes/no answer
    pub answer: Verdict,
    /// Localized yes/no text
    pub verdict: &'static str,
    /// Full-moon-tonight line, or a countdown to the next one
    pub detail_text: String,
    /// Rounded days until the next full moon
    pub days_until_next_full_moon: i64,
    /// Date of the next full moon
    pub next_full_moon: CalendarDate,
    /// Date of the most recent full moon
    pub last_full_moon: CalendarDate,
    /// Calendar days between `last_full_moon` and `date`
    pub days_since_last_full_moon: i64,
    /// Localized last-full-moon line
    pub last_full_moon_text: String,
    /// Localized long date with weekday
    pub date_text: String,
    /// Machine-readable `YYYY-MM-DD`
    pub iso_date: String,
}

impl MoonReport {
    /// Build the report for a date.
    pub fn for_date(date: CalendarDate, locale: Locale) -> Self {
        let date = date.normalized();
        Self::from_phase(date, phase::compute_phase(&date), locale)
    }

    /// Build the report for a date whose phase is already known.
    ///
    /// Overflowing dates are rolled into range first, so every field names
    /// the same day.
    pub fn from_phase(date: CalendarDate, phase: f64, locale: Locale) -> Self {
        let date = date.normalized();
        let bucket = phase::classify_phase(phase);
        let full = phase::is_full_moon(phase);
        let answer = if full { Verdict::Yes } else { Verdict::No };

        let days_until_next_full_moon = phase::days_until_next_full_moon(phase);
        let detail_text = if full {
            locale.full_moon_tonight().to_string()
        } else {
            locale.next_full_moon_text(days_until_next_full_moon)
        };

        let last_full_moon = phase::last_full_moon_date(&date, phase);
        let days_since_last_full_moon = date.days_since(&last_full_moon);

        Self {
            date,
            locale,
            phase,
            bucket,
            emoji: bucket.emoji(),
            phase_name: locale.phase_name(bucket),
            answer,
            verdict: locale.verdict(full),
            detail_text,
            days_until_next_full_moon,
            next_full_moon: phase::next_full_moon_date(&date, phase),
            last_full_moon,
            days_since_last_full_moon,
            last_full_moon_text: locale
                .last_full_moon_text(days_since_last_full_moon, &last_full_moon),
            date_text: locale.long_date(&date, true),
            iso_date: date.to_string(),
        }
    }

    /// Whether tonight counts as full moon
    pub fn is_full_moon(&self) -> bool {
        self.answer == Verdict::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_full_moon() {
        let report = MoonReport::from_phase(CalendarDate::new(2026, 10, 16), 0.5, Locale::Danish);
        assert_eq!(report.emoji, "🌕");
        assert_eq!(report.phase_name, "Fuldmåne");
        assert_eq!(report.verdict, "JA! 🎉");
        assert_eq!(report.answer, Verdict::Yes);
        assert_eq!(report.detail_text, "Det er fuldmåne i nat!");
        assert_eq!(report.last_full_moon_text, "Sidste fuldmåne: I dag!");
        assert_eq!(report.days_since_last_full_moon, 0);
    }

    #[test]
    fn test_waxing_countdown() {
        let report = MoonReport::from_phase(CalendarDate::new(2026, 10, 16), 0.2, Locale::Danish);
        assert_eq!(report.answer, Verdict::No);
        assert_eq!(report.verdict, "NEJ");
        assert_eq!(report.days_until_next_full_moon, 9);
        assert_eq!(report.detail_text, "Næste fuldmåne er om cirka 9 dage");
        assert_eq!(report.next_full_moon, CalendarDate::new(2026, 10, 25));
        // 0.7 of a cycle back
        assert_eq!(report.days_since_last_full_moon, 21);
        assert_eq!(report.last_full_moon, CalendarDate::new(2026, 9, 25));
        assert_eq!(
            report.last_full_moon_text,
            "Sidste fuldmåne: 25. september 2026 (21 dage siden)"
        );
    }

    #[test]
    fn test_yesterday_was_full() {
        // one day after exact full moon
        let phase = 0.5 + 1.0 / phase::SYNODIC_MONTH;
        let report = MoonReport::from_phase(CalendarDate::new(2026, 1, 1), phase, Locale::Danish);
        assert_eq!(report.days_since_last_full_moon, 1);
        assert_eq!(report.last_full_moon, CalendarDate::new(2025, 12, 31));
        assert_eq!(
            report.last_full_moon_text,
            "Sidste fuldmåne: I går (31. december 2025)"
        );
    }

    #[test]
    fn test_date_fields() {
        let report = MoonReport::for_date(CalendarDate::new(2026, 10, 16), Locale::Danish);
        assert_eq!(report.date_text, "fredag den 16. oktober 2026");
        assert_eq!(report.iso_date, "2026-10-16");
    }

    #[test]
    fn test_overflowing_date_is_rolled_into_range() {
        let report = MoonReport::for_date(CalendarDate::new(2023, 3, 0), Locale::Danish);
        assert_eq!(report.date, CalendarDate::new(2023, 2, 28));
        assert_eq!(report.iso_date, "2023-02-28");
        assert_eq!(report.date_text, "tirsdag den 28. februar 2023");
        assert_eq!(
            report,
            MoonReport::for_date(CalendarDate::new(2023, 2, 28), Locale::Danish)
        );
    }

    #[test]
    fn test_english_report() {
        let report = MoonReport::from_phase(CalendarDate::new(2026, 10, 16), 0.5, Locale::English);
        assert_eq!(report.phase_name, "Full Moon");
        assert_eq!(report.verdict, "YES! 🎉");
    }

    #[test]
    fn test_serializes_view_model() {
        let report = MoonReport::from_phase(CalendarDate::new(2026, 10, 16), 0.5, Locale::Danish);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["emoji"], "🌕");
        assert_eq!(json["answer"], "yes");
        assert_eq!(json["bucket"], "full_moon");
        assert_eq!(json["locale"], "da");
        assert_eq!(json["iso_date"], "2026-10-16");
    }
}
