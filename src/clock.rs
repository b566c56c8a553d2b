//! Render cycle orchestration.
//!
//! Provides [`WordClock`], which owns the display hardware and runs one full
//! render per call, and the [`IndicatorSink`] trait for hardware abstraction.
//! Every cycle rebuilds the indicator set from nothing, so an indicator lit in
//! one cycle can never linger into the next.

use crate::display::compose_words;
use crate::indicator::IndicatorSet;
use crate::normalize::normalize;
use crate::seconds::compose_bar;
use crate::time::{AdjustmentInputs, TimeSource};
use crate::types::{Adjustment, ClockReading, NormalizedTime, ReadingError};

/// Trait for abstracting the indicator driver.
///
/// Implement this for your LED hardware (GPIO, shift registers, LED matrix
/// driver) to let the clock control it.
pub trait IndicatorSink {
    /// Lights exactly the indicators in the set and turns all others off.
    ///
    /// Called once per cycle with a freshly built set. Handle any hardware
    /// errors internally - this method cannot fail. Implementations must not
    /// touch outputs reserved for other purposes.
    fn render(&mut self, indicators: &IndicatorSet);
}

/// The result of one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// The time shown on the display.
    pub time: NormalizedTime,

    /// Every indicator lit this cycle: words, remainder dot and seconds bar.
    pub indicators: IndicatorSet,
}

/// Errors that can occur during a render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// The reading was invalid or out of range and was not rendered.
    InvalidReading(ReadingError),
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::InvalidReading(err) => {
                write!(f, "reading not rendered: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}

impl From<ReadingError> for RenderError {
    fn from(err: ReadingError) -> Self {
        RenderError::InvalidReading(err)
    }
}

/// Computes the frame for a reading without touching any hardware.
///
/// The reading must be valid and in range; see [`ClockReading::validate`].
pub fn compose_frame(reading: &ClockReading, adjustment: &Adjustment) -> Frame {
    let time = normalize(reading, adjustment);
    let words = compose_words(&time);
    let bar = compose_bar(reading.second);

    Frame {
        time,
        indicators: words.union(&bar),
    }
}

/// Renders the time onto a word clock display.
///
/// Owns the indicator sink and hands it one complete frame per cycle. Holds no
/// state between cycles other than the last frame, kept for inspection.
///
/// # Type Parameters
/// * `S` - Indicator sink implementation type
pub struct WordClock<S: IndicatorSink> {
    sink: S,
    last_frame: Option<Frame>,
}

impl<S: IndicatorSink> WordClock<S> {
    /// Creates a clock with every indicator turned off.
    pub fn new(mut sink: S) -> Self {
        sink.render(&IndicatorSet::empty());

        Self {
            sink,
            last_frame: None,
        }
    }

    /// Samples both collaborators once and renders the result.
    ///
    /// # Returns
    /// * `Ok(Frame)` - The frame handed to the sink
    /// * `Err` - The time source returned an unusable reading; the sink was not called
    pub fn cycle<T, A>(&mut self, time_source: &mut T, inputs: &mut A) -> Result<Frame, RenderError>
    where
        T: TimeSource,
        A: AdjustmentInputs,
    {
        let reading = time_source.read();
        let adjustment = inputs.sample();
        self.render(&reading, &adjustment)
    }

    /// Validates the reading, composes a fresh frame and dispatches it.
    ///
    /// An invalid reading is rejected before anything is composed and leaves
    /// the display as it was; recovering the clock is up to the caller.
    pub fn render(
        &mut self,
        reading: &ClockReading,
        adjustment: &Adjustment,
    ) -> Result<Frame, RenderError> {
        if let Err(err) = reading.validate() {
            #[cfg(feature = "defmt")]
            defmt::warn!("skipping render: {}", err);
            return Err(err.into());
        }

        let frame = compose_frame(reading, adjustment);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "render {}:{} ({} indicators)",
            frame.time.hour12,
            frame.time.minute,
            frame.indicators.len()
        );

        self.sink.render(&frame.indicators);
        self.last_frame = Some(frame);
        Ok(frame)
    }

    /// Returns the most recently rendered frame, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the clock, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
