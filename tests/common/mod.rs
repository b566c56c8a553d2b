//! Shared test infrastructure for word-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use word_clock::{AdjustmentInputs, ClockReading, IndicatorSet, IndicatorSink, TimeSource};

// ============================================================================
// Mock Sink
// ============================================================================

/// Mock sink that records every rendered set
pub struct MockSink {
    current: IndicatorSet,
    history: heapless::Vec<IndicatorSet, 64>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            current: IndicatorSet::empty(),
            history: heapless::Vec::new(),
        }
    }

    pub fn current(&self) -> IndicatorSet {
        self.current
    }

    pub fn history(&self) -> &[IndicatorSet] {
        &self.history
    }
}

impl IndicatorSink for MockSink {
    fn render(&mut self, indicators: &IndicatorSet) {
        self.current = *indicators;
        let _ = self.history.push(*indicators);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock RTC that returns a settable reading and can be advanced by seconds
pub struct MockTimeSource {
    reading: ClockReading,
}

impl MockTimeSource {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            reading: ClockReading::new(hour, minute, second).unwrap(),
        }
    }

    pub fn set(&mut self, reading: ClockReading) {
        self.reading = reading;
    }

    /// Advance the clock by whole seconds, wrapping at midnight
    pub fn advance_seconds(&mut self, seconds: u32) {
        let r = self.reading;
        let total = (r.hour as u32 * 3600 + r.minute as u32 * 60 + r.second as u32 + seconds) % 86_400;
        self.reading = ClockReading::new(
            (total / 3600) as u8,
            ((total / 60) % 60) as u8,
            (total % 60) as u8,
        )
        .unwrap();
    }
}

impl TimeSource for MockTimeSource {
    fn read(&mut self) -> ClockReading {
        self.reading
    }
}

// ============================================================================
// Mock Adjustment Inputs
// ============================================================================

/// Mock controls that count how often they are sampled
pub struct MockInputs {
    pub dst: bool,
    pub offset: i8,
    pub dst_samples: u32,
    pub offset_samples: u32,
}

impl MockInputs {
    pub fn new(dst: bool, offset: i8) -> Self {
        Self {
            dst,
            offset,
            dst_samples: 0,
            offset_samples: 0,
        }
    }
}

impl AdjustmentInputs for MockInputs {
    fn sample_dst(&mut self) -> bool {
        self.dst_samples += 1;
        self.dst
    }

    fn sample_offset(&mut self) -> i8 {
        self.offset_samples += 1;
        self.offset
    }
}

// ============================================================================
// Mock Output Pins
// ============================================================================

/// Pin whose level is observable through a shared cell
pub struct MockPin<'a> {
    level: &'a Cell<bool>,
    writes: &'a Cell<u32>,
}

impl<'a> MockPin<'a> {
    pub fn new(level: &'a Cell<bool>, writes: &'a Cell<u32>) -> Self {
        Self { level, writes }
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Pin that fails every write
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}
