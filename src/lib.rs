#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockReading`**: One time-of-day sample from the real-time clock, flagged valid or invalid
//! - **`Adjustment`**: DST switch position and fine offset, sampled once per cycle
//! - **`NormalizedTime`**: The 12-hour value actually shown, with all carries resolved
//! - **`Indicator`** / **`IndicatorSet`**: Addressable LEDs of the word grid and the set lit in one cycle
//! - **`WordClock`**: Runs a full render per cycle and hands the result to an `IndicatorSink`
//! - **`IndicatorSink`**: Trait to implement for your LED hardware (or use `PinSink`)
//! - **`TimeSource`** / **`AdjustmentInputs`**: Traits to implement for your RTC and controls
//!
//! Rendering is a pure function of the inputs. Nothing carries over from one
//! cycle to the next, so stale indicators cannot survive a cycle.

pub mod adjust;
pub mod clock;
pub mod display;
pub mod indicator;
pub mod normalize;
pub mod pins;
pub mod seconds;
pub mod time;
pub mod types;

pub use adjust::{OffsetSmoother, offset_from_adc};
pub use clock::{Frame, IndicatorSink, RenderError, WordClock, compose_frame};
pub use display::{HOUR_LOOKAHEAD_MINUTE, HOUR_WORDS, HourWordEntry, MINUTE_PHRASES, compose_words};
pub use indicator::{INDICATOR_COUNT, Indicator, IndicatorSet};
pub use normalize::{OFFSET_DEAD_ZONE, normalize};
pub use pins::{PinMapError, PinSink};
pub use seconds::{BAR, BAR_LENGTH, compose_bar};
pub use time::{AdjustmentInputs, TimeSource};
pub use types::{Adjustment, ClockReading, MAX_FINE_OFFSET, NormalizedTime, ReadingError};
