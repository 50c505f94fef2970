//! Transfer curve tables sampled uniformly over the [-1, 1] input domain.
//!
//! A `CurveTable` holds the image of a transfer function `f: [-1, 1] -> f64`
//! sampled at a fixed resolution. Shaping units look samples up in the table
//! instead of evaluating `f` per sample, which keeps the per-sample cost flat
//! no matter how expensive the curve is to compute.
//!
//! Tables are immutable once built. Changing a curve means building a fresh
//! table and swapping it in, which is what makes lock-free replacement
//! possible in [`WaveShaper`](crate::WaveShaper).

use crate::error::ShapeError;

/// Default number of samples in a transfer curve table.
///
/// 8192 points keeps the domain quantization error around 1/8192 while the
/// table still fits comfortably in cache (64 KiB of f64).
pub const DEFAULT_CURVE_RESOLUTION: usize = 8192;

/// Interpolation mode for curve lookup.
///
/// Determines how input values that fall between two table samples are
/// handled. Higher quality modes produce smoother output but require more
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// No interpolation - round to nearest sample (lowest quality, fastest)
    None,
    /// Linear interpolation between adjacent samples (good quality/performance balance)
    #[default]
    Linear,
    /// Cubic (Hermite) interpolation using 4 points (highest quality, slowest)
    Cubic,
}

/// A transfer function sampled uniformly over [-1, 1].
///
/// Sample `i` of an `N`-point table holds `f(x_i)` where
/// `x_i = 2*i/(N-1) - 1`, so the first and last entries are exactly `f(-1)`
/// and `f(1)`.
///
/// # Examples
///
/// ```
/// use sigshape::{CurveTable, InterpolationMode};
///
/// // The squared-magnitude curve at a small resolution
/// let table = CurveTable::pow(2.0, 1025)?;
/// let y = table.sample(0.5, InterpolationMode::Linear);
/// assert!((y - 0.25).abs() < 1e-3);
/// # Ok::<(), sigshape::ShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveTable {
    samples: Vec<f64>,
}

impl CurveTable {
    /// Builds a table by sampling a transfer function over [-1, 1].
    ///
    /// # Arguments
    ///
    /// * `resolution` - Number of samples; must be at least 2
    /// * `f` - Transfer function mapping an input in [-1, 1] to an output
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidResolution`] if `resolution < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigshape::{CurveTable, InterpolationMode};
    ///
    /// // A hard-clipping curve
    /// let table = CurveTable::from_fn(4097, |x| x.clamp(-0.5, 0.5))?;
    /// assert_eq!(table.sample(1.0, InterpolationMode::Linear), 0.5);
    /// # Ok::<(), sigshape::ShapeError>(())
    /// ```
    pub fn from_fn<F>(resolution: usize, f: F) -> Result<Self, ShapeError>
    where
        F: Fn(f64) -> f64,
    {
        if resolution < 2 {
            return Err(ShapeError::InvalidResolution { resolution });
        }

        let last = (resolution - 1) as f64;
        let samples = (0..resolution)
            .map(|i| f(2.0 * i as f64 / last - 1.0))
            .collect();

        Ok(Self { samples })
    }

    /// Builds the power curve `x -> |x|^exponent`.
    ///
    /// The sign of the input is intentionally discarded: the curve operates
    /// on the magnitude, so the output always lands in [0, 1] for inputs in
    /// [-1, 1].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidExponent`] if `exponent` is not a finite
    /// value >= 0, or [`ShapeError::InvalidResolution`] if `resolution < 2`.
    pub fn pow(exponent: f64, resolution: usize) -> Result<Self, ShapeError> {
        if !exponent.is_finite() || exponent < 0.0 {
            return Err(ShapeError::InvalidExponent { value: exponent });
        }
        Self::from_fn(resolution, |x| x.abs().powf(exponent))
    }

    /// A two-point all-zero table, used as the post-disposal placeholder.
    pub(crate) fn silent() -> Self {
        Self {
            samples: vec![0.0; 2],
        }
    }

    /// Number of samples in the table.
    pub fn resolution(&self) -> usize {
        self.samples.len()
    }

    /// The raw table samples, ordered from `f(-1)` to `f(1)`.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Looks up the curve value for an input sample.
    ///
    /// The input is clamped to [-1, 1] and mapped to a fractional table
    /// position; the fractional part is resolved per `mode`. Unlike a
    /// looping wavetable, a transfer curve does not wrap: lookups at the
    /// domain edges clamp to the endpoint samples.
    ///
    /// # Arguments
    ///
    /// * `x` - Input sample, nominally in [-1, 1]
    /// * `mode` - Interpolation mode for fractional positions
    #[inline]
    pub fn sample(&self, x: f64, mode: InterpolationMode) -> f64 {
        let last = self.samples.len() - 1;
        let position = (x.clamp(-1.0, 1.0) + 1.0) / 2.0 * last as f64;

        match mode {
            InterpolationMode::None => {
                // Round to nearest sample
                let index = (position.round() as usize).min(last);
                self.samples[index]
            }
            InterpolationMode::Linear => {
                // Linear interpolation between two adjacent samples
                let index0 = (position.floor() as usize).min(last);
                let index1 = (index0 + 1).min(last);
                let frac = position.fract();

                let sample0 = self.samples[index0];
                let sample1 = self.samples[index1];

                sample0 + frac * (sample1 - sample0)
            }
            InterpolationMode::Cubic => {
                // Cubic (Hermite) interpolation using 4 points, clamped at
                // the table edges
                let index1 = (position.floor() as usize).min(last);
                let index0 = index1.saturating_sub(1);
                let index2 = (index1 + 1).min(last);
                let index3 = (index1 + 2).min(last);
                let frac = position.fract();

                let y0 = self.samples[index0];
                let y1 = self.samples[index1];
                let y2 = self.samples[index2];
                let y3 = self.samples[index3];

                // Hermite interpolation
                let c0 = y1;
                let c1 = 0.5 * (y2 - y0);
                let c2 = y0 - 2.5 * y1 + 2.0 * y2 - 0.5 * y3;
                let c3 = 0.5 * (y3 - y0) + 1.5 * (y1 - y2);

                c0 + frac * (c1 + frac * (c2 + frac * c3))
            }
        }
    }
}
