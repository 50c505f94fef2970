//! Error types for shaping units.

use thiserror::Error;

/// Errors produced by curve construction and shaping-unit control operations.
///
/// All errors are synchronous: they are returned directly from the offending
/// call, and the unit's previous configuration stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    /// The exponent is not a finite value >= 0.
    ///
    /// `|x|^e` is only a useful transfer curve for finite, non-negative
    /// exponents; negative exponents diverge at x = 0.
    #[error("invalid exponent {value}: must be finite and >= 0")]
    InvalidExponent {
        /// The rejected exponent value.
        value: f64,
    },

    /// The requested table resolution cannot represent a curve.
    ///
    /// A transfer table needs at least the two domain endpoints.
    #[error("invalid curve resolution {resolution}: a table needs at least 2 points")]
    InvalidResolution {
        /// The rejected resolution.
        resolution: usize,
    },

    /// A control operation was invoked on a disposed unit.
    #[error("unit has been disposed")]
    Disposed,
}
