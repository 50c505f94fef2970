//! Core signal processing trait and constant sources.
//!
//! This module provides the fundamental `Signal` trait that represents
//! any audio signal source or processor that can generate samples.

/// Common interface for all signal sources and processors.
///
/// This trait defines the core functionality for anything that can generate
/// audio samples: oscillators, shaping units, envelopes, and so on.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Implementation of `Signal` for `f64` representing a constant signal value.
///
/// This allows using constant values anywhere a `Signal` is expected,
/// which is useful for DC offsets or testing shaping units with a known
/// input level.
///
/// # Examples
///
/// ```
/// use sigshape::Signal;
///
/// let mut constant = 0.5_f64;
/// assert_eq!(constant.next_sample(), 0.5);
///
/// let mut buffer = vec![0.0; 4];
/// constant.process(&mut buffer);
/// assert_eq!(buffer, vec![0.5, 0.5, 0.5, 0.5]);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(*self);
    }
}

/// A constant signal that always returns the same value.
///
/// This is a lightweight wrapper around `f64` that carries a sample rate at
/// the type level, so it can stand in anywhere an `AudioSignal` is expected.
///
/// # Examples
///
/// ```
/// use sigshape::{ConstantSignal, Signal};
///
/// let mut constant = ConstantSignal::<44100>(0.5);
/// assert_eq!(constant.next_sample(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal<const SAMPLE_RATE: u32>(pub f64);

impl<const SAMPLE_RATE: u32> Signal for ConstantSignal<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl<const SAMPLE_RATE: u32> From<f64> for ConstantSignal<SAMPLE_RATE> {
    fn from(value: f64) -> Self {
        ConstantSignal::<SAMPLE_RATE>(value)
    }
}

impl<const SAMPLE_RATE: u32> crate::AudioSignal<SAMPLE_RATE> for ConstantSignal<SAMPLE_RATE> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_is_a_constant_signal() {
        let mut value = 0.25_f64;
        assert_eq!(value.next_sample(), 0.25);
        assert_eq!(value.next_sample(), 0.25);
    }

    #[test]
    fn test_constant_signal_process_fills_buffer() {
        let mut constant = ConstantSignal::<44100>(-0.75);
        let mut buffer = vec![0.0; 8];
        constant.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == -0.75));
    }

    #[test]
    fn test_constant_signal_from_f64() {
        let constant: ConstantSignal<44100> = 0.5.into();
        assert_eq!(constant.0, 0.5);
    }
}
