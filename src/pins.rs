//! [`IndicatorSink`] that drives one GPIO output per indicator.

use crate::clock::IndicatorSink;
use crate::indicator::{Indicator, IndicatorSet};
use embedded_hal::digital::OutputPin;
use heapless::Vec;

/// Errors that can occur while binding indicators to pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMapError {
    /// The indicator is already bound to a pin.
    DuplicateIndicator(Indicator),

    /// The sink is full and cannot accept more pins.
    MapFull { capacity: usize },
}

impl core::fmt::Display for PinMapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinMapError::DuplicateIndicator(indicator) => {
                write!(f, "indicator {:?} is already bound to a pin", indicator)
            }
            PinMapError::MapFull { capacity } => {
                write!(f, "pin map is full (capacity {})", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PinMapError {}

/// Drives word clock indicators wired directly to output pins.
///
/// Only bound pins are ever written, so lines reserved for other purposes
/// (serial RX/TX, the RTC bus) stay untouched as long as they are not bound.
///
/// # Type Parameters
/// * `P` - Output pin type, shared by all bound pins
/// * `N` - Maximum number of bound pins
pub struct PinSink<P: OutputPin, const N: usize> {
    pins: Vec<(Indicator, P), N>,
    active_low: bool,
    write_failures: u32,
}

impl<P: OutputPin, const N: usize> PinSink<P, N> {
    /// Creates an empty sink for LEDs lit by driving the pin high.
    pub fn new() -> Self {
        Self::with_polarity(false)
    }

    /// Creates an empty sink for LEDs lit by driving the pin low.
    pub fn active_low() -> Self {
        Self::with_polarity(true)
    }

    fn with_polarity(active_low: bool) -> Self {
        Self {
            pins: Vec::new(),
            active_low,
            write_failures: 0,
        }
    }

    /// Binds an indicator to an output pin and switches the pin off.
    ///
    /// # Errors
    /// * `DuplicateIndicator` - The indicator already has a pin
    /// * `MapFull` - All `N` slots are in use
    pub fn bind(&mut self, indicator: Indicator, pin: P) -> Result<(), PinMapError> {
        if self.pins.iter().any(|(bound, _)| *bound == indicator) {
            return Err(PinMapError::DuplicateIndicator(indicator));
        }

        self.pins
            .push((indicator, pin))
            .map_err(|_| PinMapError::MapFull { capacity: N })?;

        let active_low = self.active_low;
        if let Some((_, pin)) = self.pins.last_mut() {
            if drive(pin, false, active_low).is_err() {
                self.write_failures = self.write_failures.saturating_add(1);
            }
        }
        Ok(())
    }

    /// Switches every bound pin off.
    pub fn all_off(&mut self) {
        self.render(&IndicatorSet::empty());
    }

    /// Returns the indicators that have a pin bound.
    pub fn bound(&self) -> IndicatorSet {
        self.pins.iter().map(|(indicator, _)| *indicator).collect()
    }

    /// Number of pin writes that failed since creation.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    /// Releases the bound pins.
    pub fn release(self) -> Vec<(Indicator, P), N> {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> Default for PinSink<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OutputPin, const N: usize> IndicatorSink for PinSink<P, N> {
    fn render(&mut self, indicators: &IndicatorSet) {
        let active_low = self.active_low;
        for (indicator, pin) in self.pins.iter_mut() {
            if drive(pin, indicators.contains(*indicator), active_low).is_err() {
                self.write_failures = self.write_failures.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("failed to drive pin for {}", indicator);
            }
        }
    }
}

#[inline]
fn drive<P: OutputPin>(pin: &mut P, on: bool, active_low: bool) -> Result<(), P::Error> {
    if on != active_low {
        pin.set_high()
    } else {
        pin.set_low()
    }
}
