//! Core value types for one render cycle.

/// Largest fine offset magnitude, in minutes, the adjustment inputs may report.
pub const MAX_FINE_OFFSET: i8 = 15;

/// A raw time-of-day reading from the clock source.
///
/// Produced once per render cycle and never mutated afterwards. Use
/// [`ClockReading::new`] to build a reading that is known to be in range, or
/// [`ClockReading::invalid`] when the clock could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    /// Hour of day, 0-23.
    pub hour: u8,

    /// Minute of hour, 0-59.
    pub minute: u8,

    /// Second of minute, 0-59.
    pub second: u8,

    /// Whether the clock source vouches for this reading.
    pub valid: bool,
}

impl ClockReading {
    /// Creates a valid reading after range-checking every field.
    ///
    /// # Errors
    /// * `HourOutOfRange` - `hour` is above 23
    /// * `MinuteOutOfRange` - `minute` is above 59
    /// * `SecondOutOfRange` - `second` is above 59
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ReadingError> {
        let reading = Self {
            hour,
            minute,
            second,
            valid: true,
        };
        reading.validate()?;
        Ok(reading)
    }

    /// Creates a reading flagged as invalid.
    ///
    /// Time sources return this when the clock has lost power or could not be
    /// reached. Such a reading is never rendered.
    pub const fn invalid() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            valid: false,
        }
    }

    /// Checks that the reading is flagged valid and every field is in range.
    pub fn validate(&self) -> Result<(), ReadingError> {
        if !self.valid {
            return Err(ReadingError::Invalid);
        }
        if self.hour > 23 {
            return Err(ReadingError::HourOutOfRange(self.hour));
        }
        if self.minute > 59 {
            return Err(ReadingError::MinuteOutOfRange(self.minute));
        }
        if self.second > 59 {
            return Err(ReadingError::SecondOutOfRange(self.second));
        }
        Ok(())
    }
}

/// Manual adjustments sampled once per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adjustment {
    /// Daylight-saving switch. `false` (winter position) shows one hour less
    /// than the clock source reports.
    pub dst_active: bool,

    /// Fine offset in minutes, within `-MAX_FINE_OFFSET..=MAX_FINE_OFFSET`.
    pub fine_offset_minutes: i8,
}

impl Adjustment {
    /// Creates an adjustment, clamping the offset to the supported range.
    pub fn new(dst_active: bool, fine_offset_minutes: i8) -> Self {
        Self {
            dst_active,
            fine_offset_minutes: fine_offset_minutes.clamp(-MAX_FINE_OFFSET, MAX_FINE_OFFSET),
        }
    }
}

/// A 12-hour clock value with every carry resolved.
///
/// `hour12` is always in 0-11 (0 stands for twelve o'clock) and `minute` in 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NormalizedTime {
    pub hour12: u8,
    pub minute: u8,
}

/// Reasons a clock reading cannot be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingError {
    /// The clock source flagged the reading as invalid.
    Invalid,

    /// Hour above 23.
    HourOutOfRange(u8),

    /// Minute above 59.
    MinuteOutOfRange(u8),

    /// Second above 59.
    SecondOutOfRange(u8),
}

impl core::fmt::Display for ReadingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadingError::Invalid => {
                write!(f, "clock source reported an invalid reading")
            }
            ReadingError::HourOutOfRange(hour) => {
                write!(f, "hour {} is out of range (expected 0-23)", hour)
            }
            ReadingError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} is out of range (expected 0-59)", minute)
            }
            ReadingError::SecondOutOfRange(second) => {
                write!(f, "second {} is out of range (expected 0-59)", second)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadingError {}
