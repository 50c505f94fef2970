//! Sigshape - table-based waveshaping units for composable signal graphs.
//!
//! This library provides nonlinear transfer-function units that slot into a
//! chain of signal processors. A shaping unit wraps its upstream source, runs
//! every sample through a precomputed lookup table, and hands the result
//! downstream, so chains read the same way they flow.
//!
//! The two building blocks are:
//!
//! - [`WaveShaper`]: applies an arbitrary transfer curve, sampled into a
//!   [`CurveTable`] at construction and replaceable at runtime with a single
//!   atomic swap.
//! - [`Pow`]: the exponent-curve unit. It maps each normalized input sample
//!   `x` in [-1, 1] to `|x|^exponent`, which is the classic curve for
//!   waveshaping distortion and envelope shaping.
//!
//! # Examples
//!
//! ```
//! use sigshape::{ConstantSignal, Pow, Signal};
//!
//! // Square the magnitude of a 0.5 DC signal.
//! let source = ConstantSignal::<44100>(0.5);
//! let mut node = Pow::new(source, 2.0)?;
//! assert!((node.next_sample() - 0.25).abs() < 1e-3);
//! # Ok::<(), sigshape::ShapeError>(())
//! ```
//!
//! Curve replacement is lock-free: a [`PowHandle`] obtained from
//! [`Pow::handle`] can retune the exponent from a control thread while the
//! audio thread keeps pulling samples, and every sample is shaped by one
//! complete table (old or new, never a half-written mix).

pub mod core;
pub mod error;
pub mod shaping;

// Re-export commonly used types at the crate root
pub use crate::core::{AudioSignal, ConstantSignal, Signal};
pub use error::ShapeError;
pub use shaping::{
    CurveTable, DEFAULT_CURVE_RESOLUTION, DEFAULT_EXPONENT, InterpolationMode, Pow, PowHandle,
    ShapeExt, WaveShaper,
};
