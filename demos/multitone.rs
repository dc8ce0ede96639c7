//! Spectrum of a three-tone test signal, printed as a bar chart.
//!
//! `SPLIT_DFT_ALGORITHM=radix2 RUST_LOG=debug cargo run --example multitone`

use std::f32::consts::PI;
use std::time::Instant;

use rs_split_dft::float::spectrum::{bin_frequency, magnitude};
use rs_split_dft::{EngineConfig, RealDft, SpectrumProcess, TransformEngine, TwiddleTable};
use num_complex::Complex32;
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 2048;
const SAMPLE_RATE: f32 = 44_100.0;
const BASE_HZ: f32 = 250.0;
/// Magnitude units per `|` in the bar chart.
const SCALE_FACTOR: f32 = 30.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut phase = 0.0f32;
    let mut input = vec![0.0f32; SAMPLES];
    for sample in input.iter_mut() {
        phase += 2.0 * PI * BASE_HZ / SAMPLE_RATE;
        if phase >= 2.0 * PI {
            phase -= 2.0 * PI;
        }
        *sample = 4.0 * phase.sin() + 2.0 * (2.0 * phase).sin() + (3.0 * phase).sin();
    }

    let config = EngineConfig::from_env();
    let twiddles = TwiddleTable::build(SAMPLES)?;
    let dft = RealDft::new(TransformEngine::new(config), &twiddles);
    let mut output = vec![Complex32::new(0.0, 0.0); dft.bins()];

    let start = Instant::now();
    dft.process(&input, &mut output)?;
    let elapsed = start.elapsed();

    println!("algorithm = {:?}, time elapsed = {:?}", config.algorithm, elapsed);
    for (k, &bin) in output.iter().take(SAMPLES / 8).enumerate() {
        let bars = (magnitude(bin) / SCALE_FACTOR) as usize;
        println!(
            "bin {} f = {:.6}{}",
            k,
            bin_frequency(k, SAMPLE_RATE, SAMPLES),
            "|".repeat(bars)
        );
    }

    Ok(())
}
