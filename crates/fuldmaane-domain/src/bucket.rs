//! Phase buckets - the eight named segments of the lunar cycle

use serde::Serialize;

/// Named segment of the lunar cycle
///
/// Each bucket spans 1/8 of the cycle. The boundaries are shifted by 1/16 so
/// that new moon is centred on phase 0 and wraps across the 0/1 seam:
///
/// | Bucket | Phase range |
/// |--------|-------------|
/// | New Moon | `[0.9375, 1) ∪ [0, 0.0625)` |
/// | Waxing Crescent | `[0.0625, 0.1875)` |
/// | First Quarter | `[0.1875, 0.3125)` |
/// | Waxing Gibbous | `[0.3125, 0.4375)` |
/// | Full Moon | `[0.4375, 0.5625)` |
/// | Waning Gibbous | `[0.5625, 0.6875)` |
/// | Last Quarter | `[0.6875, 0.8125)` |
/// | Waning Crescent | `[0.8125, 0.9375)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseBucket {
    /// Moon not visible
    NewMoon,
    /// Thin sliver growing on the right (northern hemisphere)
    WaxingCrescent,
    /// Right half lit
    FirstQuarter,
    /// More than half lit, growing
    WaxingGibbous,
    /// Fully lit
    FullMoon,
    /// More than half lit, shrinking
    WaningGibbous,
    /// Left half lit
    LastQuarter,
    /// Thin sliver shrinking on the left
    WaningCrescent,
}

/// Upper (exclusive) bound of each bucket, in cycle order.
const BOUNDARIES: [(f64, PhaseBucket); 8] = [
    (0.0625, PhaseBucket::NewMoon),
    (0.1875, PhaseBucket::WaxingCrescent),
    (0.3125, PhaseBucket::FirstQuarter),
    (0.4375, PhaseBucket::WaxingGibbous),
    (0.5625, PhaseBucket::FullMoon),
    (0.6875, PhaseBucket::WaningGibbous),
    (0.8125, PhaseBucket::LastQuarter),
    (0.9375, PhaseBucket::WaningCrescent),
];

impl PhaseBucket {
    /// All buckets in cycle order, starting at new moon.
    pub const ALL: [PhaseBucket; 8] = [
        PhaseBucket::NewMoon,
        PhaseBucket::WaxingCrescent,
        PhaseBucket::FirstQuarter,
        PhaseBucket::WaxingGibbous,
        PhaseBucket::FullMoon,
        PhaseBucket::WaningGibbous,
        PhaseBucket::LastQuarter,
        PhaseBucket::WaningCrescent,
    ];

    /// Classify a phase fraction.
    ///
    /// Comparisons are strict; anything at or past 0.9375 (including exactly
    /// 1.0 from float rounding) falls back to new moon.
    pub fn from_phase(phase: f64) -> Self {
        BOUNDARIES
            .iter()
            .find(|(upper, _)| phase < *upper)
            .map(|(_, bucket)| *bucket)
            .unwrap_or(PhaseBucket::NewMoon)
    }

    /// Moon glyph for this bucket
    pub fn emoji(&self) -> &'static str {
        match self {
            PhaseBucket::NewMoon => "🌑",
            PhaseBucket::WaxingCrescent => "🌒",
            PhaseBucket::FirstQuarter => "🌓",
            PhaseBucket::WaxingGibbous => "🌔",
            PhaseBucket::FullMoon => "🌕",
            PhaseBucket::WaningGibbous => "🌖",
            PhaseBucket::LastQuarter => "🌗",
            PhaseBucket::WaningCrescent => "🌘",
        }
    }

    /// Stable identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseBucket::NewMoon => "new_moon",
            PhaseBucket::WaxingCrescent => "waxing_crescent",
            PhaseBucket::FirstQuarter => "first_quarter",
            PhaseBucket::WaxingGibbous => "waxing_gibbous",
            PhaseBucket::FullMoon => "full_moon",
            PhaseBucket::WaningGibbous => "waning_gibbous",
            PhaseBucket::LastQuarter => "last_quarter",
            PhaseBucket::WaningCrescent => "waning_crescent",
        }
    }
}
