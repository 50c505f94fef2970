//! Exponent-curve shaping unit.
//!
//! `Pow` raises the magnitude of a normalized signal to a configurable
//! power: each input sample `x` in [-1, 1] becomes `|x|^exponent`. The sign
//! of the input is intentionally discarded, not reapplied, so the output
//! lands in [0, 1]. Exponents above 1 push mid-range values toward zero
//! (sharper curve); exponents below 1 lift them toward one.
//!
//! The unit owns a [`WaveShaper`] preloaded with the power curve and keeps
//! that table consistent with the current exponent: every successful
//! `set_exponent` rebuilds the curve and reloads it before returning.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use atomic_float::AtomicF64;

use crate::core::{AudioSignal, Signal};
use crate::error::ShapeError;
use crate::shaping::curve::{CurveTable, DEFAULT_CURVE_RESOLUTION, InterpolationMode};
use crate::shaping::waveshaper::{ShaperState, WaveShaper};

/// Exponent used when a `Pow` unit is constructed without one.
///
/// An exponent of 1.0 makes the unit a plain magnitude pass-through
/// (`|x|^1 = |x|`), a neutral starting point before the curve is tuned.
pub const DEFAULT_EXPONENT: f64 = 1.0;

fn validate_exponent(exponent: f64) -> Result<f64, ShapeError> {
    if exponent.is_finite() && exponent >= 0.0 {
        Ok(exponent)
    } else {
        Err(ShapeError::InvalidExponent { value: exponent })
    }
}

/// Raises the magnitude of the incoming signal to a configurable power.
///
/// Any finite exponent >= 0 is accepted. Exponents of 2 or more give the
/// pronounced curves typically used for waveshaping; smaller values produce
/// softer, still-valid curves. NaN, infinities, and negative exponents are
/// rejected with [`ShapeError::InvalidExponent`] and leave the previous
/// curve in effect.
///
/// The setter returns the unit for chaining, and a [`PowHandle`] allows a
/// control thread to retune the exponent while the audio thread samples.
///
/// # Examples
///
/// ```
/// use sigshape::{ConstantSignal, Pow, Signal};
///
/// let source = ConstantSignal::<44100>(0.5);
/// let mut node = Pow::new(source, 2.0)?;
/// assert!((node.next_sample() - 0.25).abs() < 1e-3);
///
/// node.set_exponent(4.0)?;
/// assert!((node.next_sample() - 0.0625).abs() < 1e-3);
/// # Ok::<(), sigshape::ShapeError>(())
/// ```
pub struct Pow<S: Signal> {
    shaper: WaveShaper<S>,
    exponent: Arc<AtomicF64>,
}

impl<S: Signal> Pow<S> {
    /// Creates a power-curve unit at the default table resolution (8192).
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidExponent`] if `exponent` is not a
    /// finite value >= 0.
    pub fn new(source: S, exponent: f64) -> Result<Self, ShapeError> {
        Self::with_resolution(source, exponent, DEFAULT_CURVE_RESOLUTION)
    }

    /// Creates a power-curve unit with the default exponent of 1.0.
    pub fn with_default(source: S) -> Self {
        // DEFAULT_EXPONENT always passes validation
        Self::new(source, DEFAULT_EXPONENT).expect("default exponent is valid")
    }

    /// Creates a power-curve unit with an explicit table resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidExponent`] for a non-finite or negative
    /// exponent, or [`ShapeError::InvalidResolution`] if `resolution < 2`.
    pub fn with_resolution(
        source: S,
        exponent: f64,
        resolution: usize,
    ) -> Result<Self, ShapeError> {
        let exponent = validate_exponent(exponent)?;
        let shaper = WaveShaper::new(source, |x: f64| x.abs().powf(exponent), resolution)?;
        Ok(Self {
            shaper,
            exponent: Arc::new(AtomicF64::new(exponent)),
        })
    }

    /// Sets a new exponent and reloads the curve table before returning.
    ///
    /// There is no stale-table window: once this call returns, every
    /// subsequent sample is shaped by the new curve. On error the previous
    /// exponent and table stay in effect.
    ///
    /// Returns the unit for chaining.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidExponent`] for a non-finite or negative value,
    /// [`ShapeError::Disposed`] after disposal.
    pub fn set_exponent(&mut self, exponent: f64) -> Result<&mut Self, ShapeError> {
        let exponent = validate_exponent(exponent)?;
        self.shaper.set_map(move |x| x.abs().powf(exponent))?;
        self.exponent.store(exponent, Ordering::Release);
        Ok(self)
    }

    /// The last accepted exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent.load(Ordering::Acquire)
    }

    /// The table resolution this unit was configured with.
    pub fn resolution(&self) -> usize {
        self.shaper.resolution()
    }

    /// Gets the interpolation mode used for table lookup.
    pub fn interpolation(&self) -> InterpolationMode {
        self.shaper.interpolation()
    }

    /// Builder-style method to set the interpolation mode.
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.shaper.set_interpolation(mode);
        self
    }

    /// Tears the unit down: disposes the owned shaper and releases its
    /// table. Idempotent; returns the unit for chaining.
    ///
    /// After disposal `set_exponent` fails with [`ShapeError::Disposed`]
    /// and the audio path outputs silence.
    pub fn dispose(&mut self) -> &mut Self {
        self.shaper.dispose();
        self
    }

    /// Whether this unit has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.shaper.is_disposed()
    }

    /// Creates a clone-able control handle for this unit.
    ///
    /// The handle shares the unit's curve table and exponent, so a control
    /// thread can call [`PowHandle::set_exponent`] while the audio thread
    /// keeps pulling samples from the unit itself.
    pub fn handle(&self) -> PowHandle {
        PowHandle {
            state: Arc::clone(self.shaper.state()),
            exponent: Arc::clone(&self.exponent),
        }
    }
}

impl<S: Signal> Signal for Pow<S> {
    fn next_sample(&mut self) -> f64 {
        self.shaper.next_sample()
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Pow<S> {}

/// Control handle for a [`Pow`] unit.
///
/// Cheap to clone; all clones operate on the same unit. Retuning through a
/// handle builds the replacement table on the calling thread and publishes
/// it with one atomic swap, so it is safe to use from a control thread while
/// the audio thread samples the unit.
#[derive(Clone)]
pub struct PowHandle {
    state: Arc<ShaperState>,
    exponent: Arc<AtomicF64>,
}

impl PowHandle {
    /// Sets a new exponent and reloads the unit's curve table.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidExponent`] for a non-finite or negative value,
    /// [`ShapeError::Disposed`] after the unit is disposed.
    pub fn set_exponent(&self, exponent: f64) -> Result<(), ShapeError> {
        let exponent = validate_exponent(exponent)?;
        let table = CurveTable::pow(exponent, self.state.resolution())?;
        self.state.load(table)?;
        self.exponent.store(exponent, Ordering::Release);
        Ok(())
    }

    /// The last accepted exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent.load(Ordering::Acquire)
    }

    /// Whether the underlying unit has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConstantSignal;

    #[test]
    fn test_exponent_two_squares_the_magnitude() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 2.0).unwrap();
        assert!((node.next_sample() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_exponent_four() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 4.0).unwrap();
        assert!((node.next_sample() - 0.0625).abs() < 0.001);
    }

    #[test]
    fn test_default_exponent_is_one() {
        let source = ConstantSignal::<44100>(0.5);
        let node = Pow::with_default(source);
        assert_eq!(node.exponent(), 1.0);
    }

    #[test]
    fn test_negative_input_is_folded_positive() {
        let source = ConstantSignal::<44100>(-0.5);
        let mut node = Pow::new(source, 2.0).unwrap();
        assert!((node.next_sample() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_set_exponent_chains_and_takes_effect() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 2.0).unwrap();

        node.set_exponent(3.0).unwrap().set_exponent(4.0).unwrap();
        assert_eq!(node.exponent(), 4.0);
        assert!((node.next_sample() - 0.0625).abs() < 0.001);
    }

    #[test]
    fn test_set_exponent_is_idempotent() {
        let source = ConstantSignal::<44100>(0.7);
        let mut node = Pow::new(source, 2.5).unwrap();
        let once = node.next_sample();

        node.set_exponent(2.5).unwrap();
        node.set_exponent(2.5).unwrap();
        let twice = node.next_sample();

        assert!((once - twice).abs() < 1e-12);
    }

    #[test]
    fn test_exponents_below_two_are_accepted() {
        // Contract: any finite exponent >= 0 is valid; values below 2 just
        // produce a softer curve.
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 0.5).unwrap();
        let expected = 0.5_f64.sqrt();
        assert!((node.next_sample() - expected).abs() < 0.001);
    }

    #[test]
    fn test_rejects_non_finite_and_negative_exponents() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -2.0] {
            let source = ConstantSignal::<44100>(0.5);
            assert!(
                matches!(
                    Pow::new(source, bad),
                    Err(ShapeError::InvalidExponent { .. })
                ),
                "constructor accepted {bad}"
            );
        }

        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 2.0).unwrap();
        let err = node.set_exponent(f64::NAN).err().unwrap();
        assert!(matches!(err, ShapeError::InvalidExponent { .. }));
        // The previous exponent stays in effect
        assert_eq!(node.exponent(), 2.0);
        assert!((node.next_sample() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_dispose_rejects_further_control_ops() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 2.0).unwrap();

        node.dispose();
        assert!(node.is_disposed());
        assert_eq!(node.set_exponent(3.0).err(), Some(ShapeError::Disposed));
        assert_eq!(node.next_sample(), 0.0);

        // Idempotent
        node.dispose();
        assert!(node.is_disposed());
    }

    #[test]
    fn test_handle_retunes_the_unit() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 2.0).unwrap();
        let handle = node.handle();

        handle.set_exponent(4.0).unwrap();
        assert_eq!(node.exponent(), 4.0);
        assert_eq!(handle.exponent(), 4.0);
        assert!((node.next_sample() - 0.0625).abs() < 0.001);
    }

    #[test]
    fn test_handle_observes_disposal() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::new(source, 2.0).unwrap();
        let handle = node.handle();

        node.dispose();
        assert!(handle.is_disposed());
        assert_eq!(handle.set_exponent(3.0), Err(ShapeError::Disposed));
    }

    #[test]
    fn test_custom_resolution() {
        let source = ConstantSignal::<44100>(0.5);
        let mut node = Pow::with_resolution(source, 2.0, 257).unwrap();
        assert_eq!(node.resolution(), 257);
        // Coarser table, looser tolerance
        assert!((node.next_sample() - 0.25).abs() < 0.01);
    }
}
