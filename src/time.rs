//! Input abstraction traits for platform-agnostic clock hardware.

use crate::types::{Adjustment, ClockReading};

/// Trait for abstracting real-time clock sources.
///
/// Implement this for your RTC driver. Return [`ClockReading::invalid`] when
/// the clock cannot be trusted (lost power, bus error); recovering the clock
/// is the implementation's job.
pub trait TimeSource {
    /// Reads the current time of day.
    fn read(&mut self) -> ClockReading;
}

/// Trait for abstracting the manual adjustment controls.
///
/// Implementations own any smoothing of the offset control, see
/// [`OffsetSmoother`](crate::adjust::OffsetSmoother).
pub trait AdjustmentInputs {
    /// Samples the daylight-saving switch. `true` is the summer position.
    fn sample_dst(&mut self) -> bool;

    /// Samples the fine offset control in minutes.
    fn sample_offset(&mut self) -> i8;

    /// Samples both controls once and clamps the offset to the supported range.
    fn sample(&mut self) -> Adjustment {
        let dst_active = self.sample_dst();
        let offset = self.sample_offset();
        Adjustment::new(dst_active, offset)
    }
}
