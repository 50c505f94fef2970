//! Integration tests: power-curve units inside a signal chain, including
//! retuning from a control thread while samples are being pulled.

use std::f64::consts::PI;
use std::thread;

use sigshape::{AudioSignal, Pow, ShapeError, ShapeExt, Signal};

const SAMPLE_RATE: u32 = 44100;

/// Minimal sine source, enough to drive a chain end to end.
struct Sine<const SAMPLE_RATE: u32> {
    phase: f64,
    increment: f64,
}

impl<const SAMPLE_RATE: u32> Sine<SAMPLE_RATE> {
    fn new(frequency: f64) -> Self {
        Self {
            phase: 0.0,
            increment: frequency / SAMPLE_RATE as f64,
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for Sine<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase * 2.0 * PI).sin();
        self.phase = (self.phase + self.increment).fract();
        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for Sine<SAMPLE_RATE> {}

#[test]
fn test_shaped_sine_stays_in_range_and_tracks_the_curve() {
    let mut reference = Sine::<SAMPLE_RATE>::new(220.0);
    let mut node = Sine::<SAMPLE_RATE>::new(220.0).pow(3.0).unwrap();

    for _ in 0..2048 {
        let x = reference.next_sample();
        let y = node.next_sample();
        let expected = x.abs().powf(3.0);
        assert!((0.0..=1.0).contains(&y), "output {y} out of range");
        assert!(
            (y - expected).abs() < 1e-3,
            "f({x}) = {y}, expected {expected}"
        );
    }
}

#[test]
fn test_batch_processing_matches_per_sample_output() {
    let mut per_sample = Sine::<SAMPLE_RATE>::new(440.0).pow(2.0).unwrap();
    let mut batched = Sine::<SAMPLE_RATE>::new(440.0).pow(2.0).unwrap();

    let mut buffer = vec![0.0; 512];
    batched.process(&mut buffer);

    for (i, &b) in buffer.iter().enumerate() {
        let a = per_sample.next_sample();
        assert!((a - b).abs() < 1e-12, "sample {i}: {a} vs {b}");
    }
}

#[test]
fn test_control_thread_retunes_while_audio_thread_samples() {
    // Exponents stay within [2, 4], so for a 0.5 input every sample must
    // land in the envelope of the two extreme curves: every observed value
    // comes from one complete table, old or new.
    let mut node = Pow::new(0.5_f64, 2.0).unwrap();
    let handle = node.handle();

    let control = thread::spawn(move || {
        for step in 0..200 {
            let exponent = 2.0 + (step % 5) as f64 * 0.5;
            handle.set_exponent(exponent).unwrap();
        }
    });

    let low = 0.5_f64.powf(4.0) - 1e-3;
    let high = 0.5_f64.powf(2.0) + 1e-3;
    for _ in 0..100_000 {
        let y = node.next_sample();
        assert!(
            (low..=high).contains(&y),
            "sample {y} outside the [{low}, {high}] curve envelope"
        );
    }

    control.join().unwrap();
    assert!((2.0..=4.0).contains(&node.exponent()));
}

#[test]
fn test_disposal_is_observed_across_threads() {
    let mut node = Pow::new(0.5_f64, 2.0).unwrap();
    let handle = node.handle();

    node.dispose();

    let control = thread::spawn(move || handle.set_exponent(3.0));
    assert_eq!(control.join().unwrap(), Err(ShapeError::Disposed));
    assert_eq!(node.next_sample(), 0.0);
}
