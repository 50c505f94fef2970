//! Core signal processing types and traits.
//!
//! This module provides the fundamental signal abstractions used throughout
//! the library:
//! - `Signal` trait for all signal sources and processors
//! - `AudioSignal` trait for sample-rate-aware signals
//! - `ConstantSignal` for fixed values

mod audio;
mod signal;

pub use audio::AudioSignal;
pub use signal::{ConstantSignal, Signal};
