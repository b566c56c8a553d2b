//! Indicator identifiers and the per-cycle set of lit indicators.
//!
//! Every addressable element of the word grid is an [`Indicator`]. Hours whose
//! name spans two LED groups on the panel (FÜNF, NEUN, ZEHN, ELF) have two
//! segment indicators each. An [`IndicatorSet`] is a fixed-size bitset over
//! all indicators and is built fresh every render cycle.

use heapless::Vec;

/// Number of distinct indicators on the panel.
pub const INDICATOR_COUNT: usize = 40;

/// One addressable on/off element of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Indicator {
    // Hour words
    HourTwelve = 0,
    HourOne,
    HourTwo,
    HourThree,
    HourFour,
    HourFiveA,
    HourFiveB,
    HourSix,
    HourSeven,
    HourEight,
    HourNineA,
    HourNineB,
    HourTenA,
    HourTenB,
    HourElevenA,
    HourElevenB,

    // Minute phrase words
    Five,
    Ten,
    Twenty,
    Three,
    Quarter,
    Before,
    After,
    Half,

    // Minute remainder dots
    MinuteOne,
    MinuteTwo,
    MinuteThree,
    MinuteFour,

    // Seconds bar, left to right
    Bar1,
    Bar2,
    Bar3,
    Bar4,
    Bar5,
    Bar6,
    Bar7,
    Bar8,
    Bar9,
    Bar10,
    Bar11,
    Bar12,
}

impl Indicator {
    /// Every indicator in identifier order.
    pub const ALL: [Indicator; INDICATOR_COUNT] = [
        Indicator::HourTwelve,
        Indicator::HourOne,
        Indicator::HourTwo,
        Indicator::HourThree,
        Indicator::HourFour,
        Indicator::HourFiveA,
        Indicator::HourFiveB,
        Indicator::HourSix,
        Indicator::HourSeven,
        Indicator::HourEight,
        Indicator::HourNineA,
        Indicator::HourNineB,
        Indicator::HourTenA,
        Indicator::HourTenB,
        Indicator::HourElevenA,
        Indicator::HourElevenB,
        Indicator::Five,
        Indicator::Ten,
        Indicator::Twenty,
        Indicator::Three,
        Indicator::Quarter,
        Indicator::Before,
        Indicator::After,
        Indicator::Half,
        Indicator::MinuteOne,
        Indicator::MinuteTwo,
        Indicator::MinuteThree,
        Indicator::MinuteFour,
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

    /// Returns the identifier as a dense index in `0..INDICATOR_COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up an indicator by its dense index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Text printed on the panel for this indicator.
    ///
    /// Two-segment hour words label each half with the letters it lights.
    pub const fn label(self) -> &'static str {
        match self {
            Indicator::HourTwelve => "ZWÖLF",
            Indicator::HourOne => "EINS",
            Indicator::HourTwo => "ZWEI",
            Indicator::HourThree => "DREI",
            Indicator::HourFour => "VIER",
            Indicator::HourFiveA => "FÜ",
            Indicator::HourFiveB => "NF",
            Indicator::HourSix => "SECHS",
            Indicator::HourSeven => "SIEBEN",
            Indicator::HourEight => "ACHT",
            Indicator::HourNineA => "NE",
            Indicator::HourNineB => "UN",
            Indicator::HourTenA => "ZE",
            Indicator::HourTenB => "HN",
            Indicator::HourElevenA => "E",
            Indicator::HourElevenB => "LF",
            Indicator::Five => "FÜNF",
            Indicator::Ten => "ZEHN",
            Indicator::Twenty => "ZWANZIG",
            Indicator::Three => "DREI",
            Indicator::Quarter => "VIERTEL",
            Indicator::Before => "VOR",
            Indicator::After => "NACH",
            Indicator::Half => "HALB",
            Indicator::MinuteOne => "+1",
            Indicator::MinuteTwo => "+2",
            Indicator::MinuteThree => "+3",
            Indicator::MinuteFour => "+4",
            Indicator::Bar1 => "|1",
            Indicator::Bar2 => "|2",
            Indicator::Bar3 => "|3",
            Indicator::Bar4 => "|4",
            Indicator::Bar5 => "|5",
            Indicator::Bar6 => "|6",
            Indicator::Bar7 => "|7",
            Indicator::Bar8 => "|8",
            Indicator::Bar9 => "|9",
            Indicator::Bar10 => "|10",
            Indicator::Bar11 => "|11",
            Indicator::Bar12 => "|12",
        }
    }

    #[inline]
    const fn bit(self) -> u64 {
        1 << (self as u8)
    }
}

/// The set of indicators to energize in one cycle.
///
/// Anything not in the set is off. Iteration yields indicators in identifier
/// order, so two equal sets always render identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorSet {
    bits: u64,
}

impl IndicatorSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Creates a set from a slice of indicators.
    pub fn from_slice(indicators: &[Indicator]) -> Self {
        let mut set = Self::empty();
        for &indicator in indicators {
            set.insert(indicator);
        }
        set
    }

    /// Adds an indicator. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, indicator: Indicator) -> bool {
        let was_present = self.contains(indicator);
        self.bits |= indicator.bit();
        !was_present
    }

    /// Removes an indicator. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, indicator: Indicator) -> bool {
        let was_present = self.contains(indicator);
        self.bits &= !indicator.bit();
        was_present
    }

    #[inline]
    pub fn contains(&self, indicator: Indicator) -> bool {
        self.bits & indicator.bit() != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the union of both sets.
    #[inline]
    pub fn union(&self, other: &IndicatorSet) -> IndicatorSet {
        IndicatorSet {
            bits: self.bits | other.bits,
        }
    }

    /// Iterates over the lit indicators in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = Indicator> + '_ {
        Indicator::ALL
            .iter()
            .copied()
            .filter(move |indicator| self.contains(*indicator))
    }

    /// Collects the lit indicators into a fixed-capacity vector.
    pub fn to_vec(&self) -> Vec<Indicator, INDICATOR_COUNT> {
        // Capacity equals the number of indicators, so pushes cannot fail.
        self.iter().collect()
    }
}

impl Extend<Indicator> for IndicatorSet {
    fn extend<T: IntoIterator<Item = Indicator>>(&mut self, iter: T) {
        for indicator in iter {
            self.insert(indicator);
        }
    }
}

impl FromIterator<Indicator> for IndicatorSet {
    fn from_iter<T: IntoIterator<Item = Indicator>>(iter: T) -> Self {
        let mut set = IndicatorSet::empty();
        set.extend(iter);
        set
    }
}

impl core::fmt::Display for IndicatorSet {
    /// Writes the labels of the lit indicators separated by spaces.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for indicator in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", indicator.label())?;
            first = false;
        }
        Ok(())
    }
}
