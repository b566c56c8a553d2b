//! Word selection for a normalized time.
//!
//! Three independent lookups make up the word part of a frame:
//!
//! - the hour word, which looks ahead to the next hour from minute 25 on
//!   ("fünf vor halb zehn" at 9:25)
//! - the minute phrase, one of twelve fixed 5-minute bands
//! - the minute remainder dot for `minute % 5`
//!
//! The phrase table follows German colloquial usage, including the regional
//! "drei viertel" for a quarter to. Bands are listed one by one; porting to
//! another locale changes the table contents, not the band structure.

use crate::indicator::Indicator::{After, Before, Five, Half, Quarter, Ten, Three, Twenty};
use crate::indicator::{Indicator, IndicatorSet};
use crate::types::NormalizedTime;

/// From this minute on the display names the coming hour.
pub const HOUR_LOOKAHEAD_MINUTE: u8 = 25;

/// The LED groups that together spell one hour's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourWordEntry {
    pub first: Indicator,
    pub second: Option<Indicator>,
}

impl HourWordEntry {
    const fn single(first: Indicator) -> Self {
        Self { first, second: None }
    }

    const fn split(first: Indicator, second: Indicator) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// Adds the entry's indicators to `set`.
    pub fn light(&self, set: &mut IndicatorSet) {
        set.insert(self.first);
        if let Some(second) = self.second {
            set.insert(second);
        }
    }
}

/// Hour words indexed by 12-hour value; index 0 is twelve o'clock.
pub const HOUR_WORDS: [HourWordEntry; 12] = [
    HourWordEntry::single(Indicator::HourTwelve),
    HourWordEntry::single(Indicator::HourOne),
    HourWordEntry::single(Indicator::HourTwo),
    HourWordEntry::single(Indicator::HourThree),
    HourWordEntry::single(Indicator::HourFour),
    HourWordEntry::split(Indicator::HourFiveA, Indicator::HourFiveB),
    HourWordEntry::single(Indicator::HourSix),
    HourWordEntry::single(Indicator::HourSeven),
    HourWordEntry::single(Indicator::HourEight),
    HourWordEntry::split(Indicator::HourNineA, Indicator::HourNineB),
    HourWordEntry::split(Indicator::HourTenA, Indicator::HourTenB),
    HourWordEntry::split(Indicator::HourElevenA, Indicator::HourElevenB),
];

/// Minute phrase words per 5-minute band, indexed by `minute / 5`.
pub const MINUTE_PHRASES: [&[Indicator]; 12] = [
    &[],                    // 00-04  (volle Stunde)
    &[Five, After],         // 05-09  fünf nach
    &[Ten, After],          // 10-14  zehn nach
    &[Quarter, After],      // 15-19  viertel nach
    &[Twenty, After],       // 20-24  zwanzig nach
    &[Five, Before, Half],  // 25-29  fünf vor halb
    &[Half],                // 30-34  halb
    &[Five, After, Half],   // 35-39  fünf nach halb
    &[Twenty, Before],      // 40-44  zwanzig vor
    &[Three, Quarter],      // 45-49  drei viertel
    &[Ten, Before],         // 50-54  zehn vor
    &[Five, Before],        // 55-59  fünf vor
];

/// Returns the index into [`HOUR_WORDS`] that names this time.
#[inline]
pub fn hour_word_index(time: &NormalizedTime) -> usize {
    if time.minute < HOUR_LOOKAHEAD_MINUTE {
        time.hour12 as usize % 12
    } else {
        (time.hour12 as usize + 1) % 12
    }
}

/// Returns the hour word that names this time.
pub fn hour_word(time: &NormalizedTime) -> &'static HourWordEntry {
    &HOUR_WORDS[hour_word_index(time)]
}

/// Returns the minute phrase words for `minute`.
pub fn minute_phrase(minute: u8) -> &'static [Indicator] {
    MINUTE_PHRASES[(minute as usize / 5) % MINUTE_PHRASES.len()]
}

/// Returns the remainder dot for `minute % 5`, or `None` on a 5-minute mark.
pub fn minute_remainder(minute: u8) -> Option<Indicator> {
    match minute % 5 {
        1 => Some(Indicator::MinuteOne),
        2 => Some(Indicator::MinuteTwo),
        3 => Some(Indicator::MinuteThree),
        4 => Some(Indicator::MinuteFour),
        _ => None,
    }
}

/// Builds the word indicators for a normalized time from scratch.
pub fn compose_words(time: &NormalizedTime) -> IndicatorSet {
    let mut set = IndicatorSet::empty();

    hour_word(time).light(&mut set);
    set.extend(minute_phrase(time.minute).iter().copied());
    if let Some(dot) = minute_remainder(time.minute) {
        set.insert(dot);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour12: u8, minute: u8) -> NormalizedTime {
        NormalizedTime { hour12, minute }
    }

    #[test]
    fn two_segment_hours_are_five_nine_ten_eleven() {
        let split: heapless::Vec<usize, 12> = HOUR_WORDS
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.second.is_some())
            .map(|(index, _)| index)
            .collect();
        assert_eq!(split.as_slice(), &[5, 9, 10, 11]);
    }

    #[test]
    fn hour_word_switches_at_twenty_five() {
        assert_eq!(hour_word_index(&at(10, 24)), 10);
        assert_eq!(hour_word_index(&at(10, 25)), 11);
        assert_eq!(hour_word_index(&at(11, 59)), 0);
        assert_eq!(hour_word_index(&at(0, 0)), 0);
    }

    #[test]
    fn phrase_bands_cover_the_hour() {
        assert!(minute_phrase(0).is_empty());
        assert!(minute_phrase(4).is_empty());
        assert_eq!(minute_phrase(5), &[Five, After]);
        assert_eq!(minute_phrase(29), &[Five, Before, Half]);
        assert_eq!(minute_phrase(30), &[Half]);
        assert_eq!(minute_phrase(47), &[Three, Quarter]);
        assert_eq!(minute_phrase(59), &[Five, Before]);
    }

    #[test]
    fn remainder_dot_follows_minute_mod_five() {
        assert_eq!(minute_remainder(0), None);
        assert_eq!(minute_remainder(7), Some(Indicator::MinuteTwo));
        assert_eq!(minute_remainder(54), Some(Indicator::MinuteFour));
        assert_eq!(minute_remainder(55), None);
    }

    #[test]
    fn compose_words_at_full_hour_lights_only_hour() {
        let set = compose_words(&at(3, 0));
        assert_eq!(set, IndicatorSet::from_slice(&[Indicator::HourThree]));
    }

    #[test]
    fn compose_words_looks_ahead_for_eleven() {
        // fünf vor elf
        let set = compose_words(&at(10, 55));
        assert_eq!(
            set,
            IndicatorSet::from_slice(&[
                Indicator::HourElevenA,
                Indicator::HourElevenB,
                Five,
                Before,
            ])
        );
    }
}
