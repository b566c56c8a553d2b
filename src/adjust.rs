//! Helpers for implementing [`AdjustmentInputs`](crate::time::AdjustmentInputs)
//! on top of a potentiometer.

use crate::types::MAX_FINE_OFFSET;
use heapless::Deque;

/// Maps a raw ADC sample in `0..=full_scale` onto the fine offset range.
///
/// The centre of the travel is 0, the ends are `-MAX_FINE_OFFSET` and
/// `MAX_FINE_OFFSET`. Samples above `full_scale` are clamped; a zero
/// `full_scale` yields 0.
pub fn offset_from_adc(raw: u16, full_scale: u16) -> i8 {
    if full_scale == 0 {
        return 0;
    }

    let span = 2 * MAX_FINE_OFFSET as i32;
    let raw = raw.min(full_scale) as i32;
    let full_scale = full_scale as i32;
    let scaled = (raw * span + full_scale / 2) / full_scale;

    (scaled - MAX_FINE_OFFSET as i32) as i8
}

/// Rolling mean over the last `N` offset samples.
///
/// Keeps a noisy potentiometer from making the minute display wander between
/// two neighbouring values. The mean is rounded to the nearest minute, halves
/// away from zero.
#[derive(Debug, Clone)]
pub struct OffsetSmoother<const N: usize> {
    samples: Deque<i8, N>,
}

impl<const N: usize> OffsetSmoother<N> {
    /// Creates an empty smoother.
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Records a sample, dropping the oldest once `N` samples are held, and
    /// returns the new smoothed offset.
    pub fn push(&mut self, offset: i8) -> i8 {
        let offset = offset.clamp(-MAX_FINE_OFFSET, MAX_FINE_OFFSET);

        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // N == 0 leaves nothing to average; the sample is simply not kept.
        let _ = self.samples.push_back(offset);

        self.value().unwrap_or(offset)
    }

    /// Returns the current smoothed offset, or `None` before the first sample.
    pub fn value(&self) -> Option<i8> {
        let count = self.samples.len() as i32;
        if count == 0 {
            return None;
        }

        let sum: i32 = self.samples.iter().map(|&sample| sample as i32).sum();
        let mean = if sum >= 0 {
            (sum + count / 2) / count
        } else {
            (sum - count / 2) / count
        };
        Some(mean as i8)
    }

    /// Forgets every recorded sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<const N: usize> Default for OffsetSmoother<N> {
    fn default() -> Self {
        Self::new()
    }
}
