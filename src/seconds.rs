//! Seconds progress bar.

use crate::indicator::{Indicator, IndicatorSet};

/// Number of segments in the seconds bar.
pub const BAR_LENGTH: usize = 12;

/// Bar segments from position 1 to 12.
pub const BAR: [Indicator; BAR_LENGTH] = [
    Indicator::Bar1,
    Indicator::Bar2,
    Indicator::Bar3,
    Indicator::Bar4,
    Indicator::Bar5,
    Indicator::Bar6,
    Indicator::Bar7,
    Indicator::Bar8,
    Indicator::Bar9,
    Indicator::Bar10,
    Indicator::Bar11,
    Indicator::Bar12,
];

/// Returns the fill level for `second`: segments at 1-based positions below
/// this value are lit.
#[inline]
pub fn bar_level(second: u8) -> usize {
    second as usize / 5 + 2
}

/// Builds the lit bar segments for `second`.
///
/// The bar grows by one segment every five seconds and is forced full in the
/// last second of the minute.
pub fn compose_bar(second: u8) -> IndicatorSet {
    let level = bar_level(second);
    let mut set: IndicatorSet = BAR
        .iter()
        .enumerate()
        .filter(|(index, _)| index + 1 < level)
        .map(|(_, segment)| *segment)
        .collect();

    if second > 58 {
        set.insert(Indicator::Bar12);
    }

    set
}
