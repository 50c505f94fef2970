//! Plays a sine tone through a power-curve unit while sweeping the exponent.
//!
//! The audio callback pulls samples from the unit; the main thread acts as
//! the control thread, retuning the exponent through a `PowHandle` once per
//! step. Higher exponents thin the tone out as mid-range values are pushed
//! toward zero.

use std::f64::consts::PI;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use sigshape::{AudioSignal, Pow, ShapeExt, Signal};

const SAMPLE_RATE: u32 = 44100;

/// Simple sine source for the demo.
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
    let node = Sine::<SAMPLE_RATE>::new(220.0).pow(2.0)?;
    let handle = node.handle();

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;
    let config = device.default_output_config()?;

    let node = Arc::new(Mutex::new(node));
    let _stream = match config.sample_format() {
        SampleFormat::F32 => create_stream::<f32>(&device, &config.into(), node)?,
        SampleFormat::I16 => create_stream::<i16>(&device, &config.into(), node)?,
        SampleFormat::U16 => create_stream::<u16>(&device, &config.into(), node)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    // Sweep the exponent up and back down
    for step in 0..24 {
        let exponent = if step < 12 {
            2.0 + step as f64 * 0.5
        } else {
            8.0 - (step - 12) as f64 * 0.5
        };
        handle.set_exponent(exponent)?;
        println!("exponent: {exponent:.1}");
        thread::sleep(Duration::from_millis(250));
    }

    Ok(())
}

fn create_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    node: Arc<Mutex<Pow<Sine<SAMPLE_RATE>>>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut node = node.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(node.next_sample() * 0.5);
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}
