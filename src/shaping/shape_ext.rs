//! Extension trait for chaining shaping units onto audio signals.

use crate::core::AudioSignal;
use crate::error::ShapeError;
use crate::shaping::curve::DEFAULT_CURVE_RESOLUTION;
use crate::shaping::pow::Pow;
use crate::shaping::waveshaper::WaveShaper;

/// Extension trait providing convenient shaping methods for audio signals.
///
/// This trait is automatically implemented for all types that implement
/// `AudioSignal`, so shaping units compose the same way the rest of a signal
/// chain does: each method consumes the upstream signal and returns the
/// shaping unit wrapped around it.
///
/// # Examples
///
/// ```
/// use sigshape::{ConstantSignal, ShapeExt, Signal};
///
/// let source = ConstantSignal::<44100>(0.5);
/// let mut shaped = source.pow(2.0)?;
/// assert!((shaped.next_sample() - 0.25).abs() < 1e-3);
/// # Ok::<(), sigshape::ShapeError>(())
/// ```
pub trait ShapeExt<const SAMPLE_RATE: u32>: AudioSignal<SAMPLE_RATE> + Sized {
    /// Raises the magnitude of this signal to the given power.
    ///
    /// Builds a [`Pow`] unit at the default table resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidExponent`] if `exponent` is not a
    /// finite value >= 0.
    fn pow(self, exponent: f64) -> Result<Pow<Self>, ShapeError> {
        Pow::new(self, exponent)
    }

    /// Shapes this signal through an arbitrary transfer curve.
    ///
    /// The curve is sampled over [-1, 1] at the default table resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigshape::{ConstantSignal, ShapeExt, Signal};
    ///
    /// // Half-wave rectification
    /// let source = ConstantSignal::<44100>(-0.5);
    /// let mut rectified = source.shape(|x| x.max(0.0))?;
    /// assert!(rectified.next_sample().abs() < 1e-3);
    /// # Ok::<(), sigshape::ShapeError>(())
    /// ```
    fn shape<F>(self, f: F) -> Result<WaveShaper<Self>, ShapeError>
    where
        F: Fn(f64) -> f64,
    {
        WaveShaper::new(self, f, DEFAULT_CURVE_RESOLUTION)
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> ShapeExt<SAMPLE_RATE> for S {}
