//! Renders a power-shaped sine tone to `pow_demo.wav`.
//!
//! Writes two seconds of a 220 Hz sine pushed through `|x|^4`, useful for
//! inspecting the shaped waveform in an editor.

use std::f64::consts::PI;

use anyhow::Result;
use sigshape::{AudioSignal, ShapeExt, Signal};

const SAMPLE_RATE: u32 = 44100;

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

fn main() -> Result<()> {
    let mut node = Sine::<SAMPLE_RATE>::new(220.0).pow(4.0)?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create("pow_demo.wav", spec)?;

    let mut buffer = vec![0.0; SAMPLE_RATE as usize * 2];
    node.process(&mut buffer);
    for sample in buffer {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    println!("wrote pow_demo.wav");
    Ok(())
}
