//! Conversion of a raw clock reading into the 12-hour value the display shows.

use crate::types::{Adjustment, ClockReading, NormalizedTime};

/// Offsets whose magnitude is at most this many minutes are ignored.
///
/// Keeps a potentiometer resting near its centre from nudging the display.
pub const OFFSET_DEAD_ZONE: i8 = 1;

/// Normalizes a reading into a 12-hour clock value.
///
/// Steps, in order: reduce the hour to 12-hour form, subtract one hour when
/// the DST switch is in the winter position, apply the fine offset (outside
/// the dead zone) and resolve the resulting minute carry into the hour.
///
/// The reading must be in range; out-of-range fields give an unspecified but
/// non-panicking result.
pub fn normalize(reading: &ClockReading, adjustment: &Adjustment) -> NormalizedTime {
    let mut hour12 = reading.hour % 12;

    if !adjustment.dst_active {
        hour12 = previous_hour(hour12);
    }

    let offset = effective_offset(adjustment.fine_offset_minutes);
    let mut minute = reading.minute as i16 + offset as i16;

    // A single correction suffices: the offset never exceeds one hour.
    if minute < 0 {
        minute += 60;
        hour12 = previous_hour(hour12);
    } else if minute >= 60 {
        minute -= 60;
        hour12 = next_hour(hour12);
    }

    NormalizedTime {
        hour12,
        minute: minute as u8,
    }
}

/// Returns the offset with the dead zone applied.
#[inline]
pub fn effective_offset(fine_offset_minutes: i8) -> i8 {
    if fine_offset_minutes.unsigned_abs() <= OFFSET_DEAD_ZONE.unsigned_abs() {
        0
    } else {
        fine_offset_minutes
    }
}

#[inline]
fn previous_hour(hour12: u8) -> u8 {
    if hour12 == 0 { 11 } else { hour12 - 1 }
}

#[inline]
fn next_hour(hour12: u8) -> u8 {
    (hour12 + 1) % 12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(hour: u8, minute: u8) -> ClockReading {
        ClockReading::new(hour, minute, 0).unwrap()
    }

    #[test]
    fn summer_time_keeps_hour() {
        let time = normalize(&reading(10, 50), &Adjustment::new(true, 0));
        assert_eq!(time, NormalizedTime { hour12: 10, minute: 50 });
    }

    #[test]
    fn winter_time_subtracts_one_hour() {
        let time = normalize(&reading(10, 50), &Adjustment::new(false, 0));
        assert_eq!(time, NormalizedTime { hour12: 9, minute: 50 });
    }

    #[test]
    fn winter_time_wraps_midnight_and_noon() {
        assert_eq!(normalize(&reading(0, 0), &Adjustment::new(false, 0)).hour12, 11);
        assert_eq!(normalize(&reading(12, 0), &Adjustment::new(false, 0)).hour12, 11);
        assert_eq!(normalize(&reading(13, 0), &Adjustment::new(false, 0)).hour12, 0);
    }

    #[test]
    fn afternoon_hours_fold_to_twelve_hour_form() {
        assert_eq!(normalize(&reading(21, 7), &Adjustment::new(true, 0)).hour12, 9);
        assert_eq!(normalize(&reading(12, 7), &Adjustment::new(true, 0)).hour12, 0);
    }

    #[test]
    fn negative_offset_borrows_from_hour() {
        let time = normalize(&reading(0, 5), &Adjustment::new(true, -10));
        assert_eq!(time, NormalizedTime { hour12: 11, minute: 55 });
    }

    #[test]
    fn positive_offset_carries_into_hour() {
        let time = normalize(&reading(11, 50), &Adjustment::new(true, 15));
        assert_eq!(time, NormalizedTime { hour12: 0, minute: 5 });
    }

    #[test]
    fn dead_zone_ignores_unit_offsets() {
        for offset in [-1, 0, 1] {
            let time = normalize(&reading(4, 30), &Adjustment::new(true, offset));
            assert_eq!(time, NormalizedTime { hour12: 4, minute: 30 });
        }
        let time = normalize(&reading(4, 30), &Adjustment::new(true, 2));
        assert_eq!(time.minute, 32);
    }

    #[test]
    fn winter_time_and_borrow_combine() {
        // 01:03 winter -> 00:03, then -5 minutes -> 11:58
        let time = normalize(&reading(1, 3), &Adjustment::new(false, -5));
        assert_eq!(time, NormalizedTime { hour12: 11, minute: 58 });
    }

    #[test]
    fn result_always_in_range() {
        for hour in 0..24 {
            for minute in 0..60 {
                for offset in -15..=15 {
                    for dst in [false, true] {
                        let time = normalize(&reading(hour, minute), &Adjustment::new(dst, offset));
                        assert!(time.hour12 < 12);
                        assert!(time.minute < 60);
                    }
                }
            }
        }
    }
}
