//! Integration tests for fuldmaane-domain
//!
//! These tests run known full and new moons through the public API, from a
//! parsed date to the finished report.

use fuldmaane_domain::{
    classify_phase, compute_phase, is_full_moon, last_full_moon_date, upcoming_full_moons,
    CalendarDate, Locale, MoonReport, PhaseBucket,
};

fn date(s: &str) -> CalendarDate {
    s.parse().expect("valid test date")
}

#[test]
fn test_known_full_moons_are_detected() {
    // Full moons from published tables; the linear model stays within the window
    for day in ["2000-01-21", "2010-01-30", "2020-01-10", "2024-09-18"] {
        let phase = compute_phase(&date(day));
        assert!(is_full_moon(phase), "{} has phase {}", day, phase);
        assert_eq!(classify_phase(phase), PhaseBucket::FullMoon, "{}", day);
    }
}

#[test]
fn test_known_new_moon_is_not_full() {
    let report = MoonReport::for_date(date("2000-01-06"), Locale::Danish);
    assert!(!report.is_full_moon());
    assert_eq!(report.emoji, "🌑");
    assert_eq!(report.phase_name, "Nymåne");
    assert_eq!(report.verdict, "NEJ");
    assert_eq!(report.detail_text, "Næste fuldmåne er om cirka 15 dage");
    assert_eq!(report.last_full_moon, date("1999-12-22"));
}

#[test]
fn test_report_for_full_moon_date() {
    let report = MoonReport::for_date(date("2000-01-21"), Locale::Danish);
    assert!(report.is_full_moon());
    assert_eq!(report.verdict, "JA! 🎉");
    assert_eq!(report.detail_text, "Det er fuldmåne i nat!");
    assert_eq!(report.date_text, "fredag den 21. januar 2000");
}

#[test]
fn test_last_full_moon_roundtrip_over_a_year() {
    let mut day = date("2025-01-01");
    for _ in 0..365 {
        let phase = compute_phase(&day);
        if phase < 0.5 {
            let last = last_full_moon_date(&day, phase);
            assert_eq!(
                classify_phase(compute_phase(&last)),
                PhaseBucket::FullMoon,
                "last full moon {} for {}",
                last,
                day
            );
        }
        day = day.add_days(1);
    }
}

#[test]
fn test_upcoming_full_moons_in_a_year() {
    let dates = upcoming_full_moons(&date("2026-01-01"), 13);
    assert_eq!(dates.len(), 13);
    assert!(dates.iter().all(|d| is_full_moon(compute_phase(d))));
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}
