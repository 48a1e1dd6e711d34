//! Fuldmåne Domain Layer
//!
//! This crate contains the lunar phase arithmetic and the view model that the
//! presentation layer renders. It performs no I/O and never reads the clock:
//! callers hand in the civil date they care about.
//!
//! ## Key Concepts
//!
//! - **Phase**: a fraction in `[0, 1)` of the synodic month; 0 is new moon, 0.5 is full moon
//! - **Phase bucket**: one of eight named segments of the cycle, centred so new moon sits on 0
//! - **Julian Date**: continuous day count used to linearize calendar arithmetic
//! - **Report**: the record of everything a page shows for one date
//!
//! ## Accuracy
//!
//! Phases come from a fixed reference new moon (2000-01-06) and the *average*
//! synodic month. The result drifts from the true phase over the years and is
//! meant for casual display, not for timing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bucket;
pub mod calendar;
pub mod error;
pub mod locale;
pub mod phase;
pub mod report;

// Re-exports for convenience
pub use bucket::PhaseBucket;
pub use calendar::CalendarDate;
pub use error::DomainError;
pub use locale::Locale;
pub use phase::{
    classify_phase, compute_julian_date, compute_phase, days_since_last_full_moon,
    days_until_next_full_moon, is_full_moon, last_full_moon_date, next_full_moon_date,
    phase_at_julian_date, upcoming_full_moons, SYNODIC_MONTH,
};
pub use report::{MoonReport, Verdict};
