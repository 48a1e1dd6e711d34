//! Lunar phase calculator
//!
//! Linear approximation: Julian date of a civil date, minus a known new moon,
//! divided by the mean synodic month. Only the date matters; time of day is
//! ignored.

use crate::bucket::PhaseBucket;
use crate::calendar::CalendarDate;

/// Mean length of the synodic month in days
pub const SYNODIC_MONTH: f64 = 29.53059;

/// Julian date of the reference new moon, 2000-01-06
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5;

/// Offset turning the civil day count into a Julian date at midnight
const JULIAN_DAY_OFFSET: f64 = 1_721_013.5;

/// Phase window, inclusive on both ends, that counts as "full moon tonight".
/// 0.05 of a cycle is roughly 1.5 days either side of exact full moon.
pub const FULL_MOON_WINDOW: (f64, f64) = (0.45, 0.55);

/// Julian date at midnight of a civil date.
///
/// Integer formula with floor division; exact for 1901-03-01 through
/// 2100-02-28 (it skips the century leap-year rule). Inputs are not validated,
/// so a day of 0 simply lands one day earlier.
pub fn compute_julian_date(date: &CalendarDate) -> f64 {
    let y = i64::from(date.year);
    let m = i64::from(date.month);
    let d = i64::from(date.day);

    let days = 367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4)
        + (275 * m).div_euclid(9)
        + d;

    days as f64 + JULIAN_DAY_OFFSET
}

/// Phase fraction in `[0, 1)` at a Julian date.
pub fn phase_at_julian_date(jd: f64) -> f64 {
    let phase = ((jd - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH).rem_euclid(1.0);
    // rem_euclid can round a tiny negative up to exactly 1.0
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Phase fraction in `[0, 1)` for a civil date.
pub fn compute_phase(date: &CalendarDate) -> f64 {
    phase_at_julian_date(compute_julian_date(date))
}

/// Named bucket for a phase fraction.
pub fn classify_phase(phase: f64) -> PhaseBucket {
    PhaseBucket::from_phase(phase)
}

/// Whether the phase is close enough to 0.5 to call it full moon tonight.
pub fn is_full_moon(phase: f64) -> bool {
    let (low, high) = FULL_MOON_WINDOW;
    phase >= low && phase <= high
}

/// Whole days until the next full moon, rounded to the nearest day.
///
/// Once the phase reaches 0.5 the next full moon is the one of the following
/// cycle.
pub fn days_until_next_full_moon(phase: f64) -> i64 {
    let days = if phase < 0.5 {
        (0.5 - phase) * SYNODIC_MONTH
    } else {
        (1.5 - phase) * SYNODIC_MONTH
    };
    days.round() as i64
}

/// Whole days since the most recent full moon, rounded to the nearest day.
pub fn days_since_last_full_moon(phase: f64) -> i64 {
    let days = if phase < 0.5 {
        // waxing: the last full moon belongs to the previous cycle
        (0.5 + phase) * SYNODIC_MONTH
    } else {
        (phase - 0.5) * SYNODIC_MONTH
    };
    days.round() as i64
}

/// Date of the most recent full moon on or before `date`.
pub fn last_full_moon_date(date: &CalendarDate, phase: f64) -> CalendarDate {
    date.sub_days(days_since_last_full_moon(phase))
}

/// Date of the next full moon after `date`.
///
/// When the rounded distance is zero this is `date` itself.
pub fn next_full_moon_date(date: &CalendarDate, phase: f64) -> CalendarDate {
    date.add_days(days_until_next_full_moon(phase))
}

/// The next `count` full-moon dates, starting from `from`.
///
/// After each hit the search restarts the day after it, so consecutive dates
/// are one synodic month apart (29 or 30 days after rounding).
pub fn upcoming_full_moons(from: &CalendarDate, count: usize) -> Vec<CalendarDate> {
    let mut cursor = *from;
    let mut dates = Vec::with_capacity(count);
    for _ in 0..count {
        let next = next_full_moon_date(&cursor, compute_phase(&cursor));
        dates.push(next);
        cursor = next.add_days(1);
    }
    dates
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    proptest! {
        /// Property: Phase is always in [0, 1)
        #[test]
        fn test_phase_in_unit_interval(year in -4000i32..4000, month in 0u32..=13, day in 0u32..=32) {
            let phase = compute_phase(&CalendarDate::new(year, month, day));
            prop_assert!((0.0..1.0).contains(&phase), "phase {} out of range", phase);
        }

        /// Property: Phase repeats after one synodic month
        #[test]
        fn test_phase_is_periodic(jd in 2_400_000.0f64..2_500_000.0) {
            let now = phase_at_julian_date(jd);
            let later = phase_at_julian_date(jd + SYNODIC_MONTH);
            prop_assert!(circular_distance(now, later) < 1e-9);
        }

        /// Property: The last full moon date classifies as full moon
        #[test]
        fn test_last_full_moon_is_full(year in 1902i32..2099, month in 1u32..=12, day in 1u32..=28) {
            let date = CalendarDate::new(year, month, day);
            let phase = compute_phase(&date);
            let last = last_full_moon_date(&date, phase);
            prop_assert!(last <= date);
            prop_assert_eq!(classify_phase(compute_phase(&last)), PhaseBucket::FullMoon);
        }

        /// Property: Upcoming full moons are one synodic month apart
        #[test]
        fn test_upcoming_spacing(year in 1902i32..2090, month in 1u32..=12, day in 1u32..=28) {
            let dates = upcoming_full_moons(&CalendarDate::new(year, month, day), 4);
            for pair in dates.windows(2) {
                let gap = pair[1].days_since(&pair[0]);
                prop_assert!((29..=30).contains(&gap), "gap {}", gap);
            }
        }
    }
}
