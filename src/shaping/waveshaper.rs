//! Generic table-driven waveshaper.
//!
//! `WaveShaper` is the unit that actually applies a transfer curve to a
//! streaming signal. It wraps its upstream source, so its input is whatever
//! feeds the wrapped signal and its output is `next_sample()` itself - the
//! unit adds no buffering of its own.
//!
//! The loaded table lives behind an `ArcSwap`, so replacing the curve from a
//! control thread is a single pointer swap: the audio thread sees either the
//! old table or the new one, never a partially written buffer, and never
//! waits on a lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;

use crate::core::{AudioSignal, Signal};
use crate::error::ShapeError;
use crate::shaping::curve::{CurveTable, InterpolationMode};

/// State shared between a shaper and any control handles derived from it.
pub(crate) struct ShaperState {
    curve: ArcSwap<CurveTable>,
    disposed: AtomicBool,
    resolution: usize,
}

impl ShaperState {
    fn new(table: CurveTable, resolution: usize) -> Self {
        Self {
            curve: ArcSwap::from_pointee(table),
            disposed: AtomicBool::new(false),
            resolution,
        }
    }

    /// Publishes a fully built replacement table.
    ///
    /// The table is constructed before this call, so the only shared-state
    /// effect is one atomic pointer store.
    pub(crate) fn load(&self, table: CurveTable) -> Result<(), ShapeError> {
        if self.disposed.load(Ordering::SeqCst) {
            return Err(ShapeError::Disposed);
        }
        self.curve.store(Arc::new(table));
        // A concurrent dispose may have swapped the placeholder in between
        // the check and the store; give the buffer back if so.
        if self.disposed.load(Ordering::SeqCst) {
            self.curve.store(Arc::new(CurveTable::silent()));
            return Err(ShapeError::Disposed);
        }
        Ok(())
    }

    /// Shapes one sample through the currently published table.
    #[inline]
    pub(crate) fn sample(&self, x: f64, mode: InterpolationMode) -> f64 {
        self.curve.load().sample(x, mode)
    }

    /// Marks the state disposed and releases the table buffer. Idempotent.
    pub(crate) fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            self.curve.store(Arc::new(CurveTable::silent()));
        }
    }

    pub(crate) fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    pub(crate) fn resolution(&self) -> usize {
        self.resolution
    }
}

/// Applies a precomputed transfer curve to an upstream signal.
///
/// The curve is sampled into a [`CurveTable`] at construction and can be
/// replaced at any time with [`set_map`](WaveShaper::set_map). Replacement is
/// atomic with respect to the audio path: a sample is shaped by either the
/// old curve or the new one, never a mix of both.
///
/// After [`dispose`](WaveShaper::dispose) the table memory is released, all
/// control operations fail with [`ShapeError::Disposed`], and the audio path
/// outputs silence.
///
/// # Examples
///
/// ```
/// use sigshape::{ConstantSignal, Signal, WaveShaper};
///
/// // A shaper that folds the signal into its absolute value
/// let source = ConstantSignal::<44100>(-0.5);
/// let mut shaper = WaveShaper::new(source, |x| x.abs(), 4097)?;
/// assert!((shaper.next_sample() - 0.5).abs() < 1e-3);
/// # Ok::<(), sigshape::ShapeError>(())
/// ```
pub struct WaveShaper<S: Signal> {
    source: S,
    state: Arc<ShaperState>,
    interpolation: InterpolationMode,
}

impl<S: Signal> WaveShaper<S> {
    /// Creates a shaper with a curve sampled from the given transfer function.
    ///
    /// # Arguments
    ///
    /// * `source` - Upstream signal to shape
    /// * `f` - Transfer function over [-1, 1]
    /// * `resolution` - Table size; must be at least 2
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidResolution`] if `resolution < 2`.
    pub fn new<F>(source: S, f: F, resolution: usize) -> Result<Self, ShapeError>
    where
        F: Fn(f64) -> f64,
    {
        let table = CurveTable::from_fn(resolution, f)?;
        Ok(Self {
            source,
            state: Arc::new(ShaperState::new(table, resolution)),
            interpolation: InterpolationMode::Linear,
        })
    }

    /// Replaces the loaded curve with a freshly sampled one.
    ///
    /// The new table is built off to the side at the configured resolution
    /// and then published with a single atomic swap, so concurrent sampling
    /// on the audio thread never observes a torn update.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Disposed`] if the shaper has been disposed.
    pub fn set_map<F>(&self, f: F) -> Result<(), ShapeError>
    where
        F: Fn(f64) -> f64,
    {
        let table = CurveTable::from_fn(self.state.resolution, f)?;
        self.state.load(table)
    }

    /// The table resolution this shaper was configured with.
    pub fn resolution(&self) -> usize {
        self.state.resolution
    }

    /// Gets the current interpolation mode.
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Sets the interpolation mode used for table lookup.
    pub fn set_interpolation(&mut self, mode: InterpolationMode) {
        self.interpolation = mode;
    }

    /// Builder-style method to set the interpolation mode.
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    /// Releases the table buffer and marks the shaper disposed.
    ///
    /// Disposal is idempotent. Afterwards `set_map` fails with
    /// [`ShapeError::Disposed`] and `next_sample` outputs silence.
    pub fn dispose(&mut self) -> &mut Self {
        self.state.dispose();
        self
    }

    /// Whether this shaper has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state.is_disposed()
    }

    pub(crate) fn state(&self) -> &Arc<ShaperState> {
        &self.state
    }
}

impl<S: Signal> Signal for WaveShaper<S> {
    fn next_sample(&mut self) -> f64 {
        if self.state.is_disposed() {
            return 0.0;
        }
        let x = self.source.next_sample();
        self.state.sample(x, self.interpolation)
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE>
    for WaveShaper<S>
{
}
