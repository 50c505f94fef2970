//! Waveshaping units: transfer curves and the nodes that apply them.
//!
//! This module provides the shaping side of the library:
//! - `CurveTable`: a transfer function sampled uniformly over [-1, 1]
//! - `WaveShaper`: applies a curve table to an upstream signal
//! - `Pow`: the exponent-curve unit, `x -> |x|^exponent`
//! - `ShapeExt`: chaining methods for building shaping chains

mod curve;
mod pow;
mod shape_ext;
mod waveshaper;

pub use curve::{CurveTable, DEFAULT_CURVE_RESOLUTION, InterpolationMode};
pub use pow::{DEFAULT_EXPONENT, Pow, PowHandle};
pub use shape_ext::ShapeExt;
pub use waveshaper::WaveShaper;
