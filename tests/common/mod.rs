//! Shared test helpers compiled into every integration-test binary.
//! Items may not all be used in every binary, so dead_code is suppressed.
#![allow(dead_code)]

use std::f32::consts::PI;

use num_complex::Complex32;

/// Sample rate of the reference multi-tone scenario.
pub const SAMPLE_RATE: f32 = 44_100.0;

pub fn assert_complex_approx(actual: Complex32, expected: Complex32, tolerance: f32, label: &str) {
    let diff = (actual - expected).l1_norm();
    assert!(
        diff <= tolerance,
        "{}: got {}, expected {}  (diff {:.2e})",
        label,
        actual,
        expected,
        diff,
    );
}

/// `x[j] = amplitude * sin(2π·bin·j/n)`, landing exactly on `bin`.
pub fn pure_tone(n: usize, bin: usize, amplitude: f32) -> Vec<f32> {
    (0..n)
        .map(|j| amplitude * (2.0 * PI * (bin * j % n) as f32 / n as f32).sin())
        .collect()
}

/// `4·sin θ + 2·sin 2θ + sin 3θ` with θ stepping by `2π·base_hz/sample_rate`
/// and wrapped back into `[0, 2π)`.
pub fn multitone(n: usize, base_hz: f32, sample_rate: f32) -> Vec<f32> {
    let step = 2.0 * PI * base_hz / sample_rate;
    let mut phase = 0.0f32;
    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        phase += step;
        if phase >= 2.0 * PI {
            phase -= 2.0 * PI;
        }
        samples.push(4.0 * phase.sin() + 2.0 * (2.0 * phase).sin() + (3.0 * phase).sin());
    }
    samples
}

/// Textbook `X[k] = Σ x[j]·e^{+2πi·jk/n}` for `k < n/2`, evaluated in f64.
pub fn dft_f64(input: &[f32]) -> Vec<(f64, f64)> {
    let n = input.len();
    (0..n / 2)
        .map(|k| {
            let mut re = 0.0f64;
            let mut im = 0.0f64;
            for (j, &x) in input.iter().enumerate() {
                let angle = 2.0 * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                re += x as f64 * angle.cos();
                im += x as f64 * angle.sin();
            }
            (re, im)
        })
        .collect()
}

/// The reference routine evaluated literally in f64, including its bin bound.
pub fn reference_f64(input: &[f32]) -> Vec<(f64, f64)> {
    let n = input.len();
    let w = |idx: usize| {
        let angle = 2.0 * std::f64::consts::PI * (idx % n) as f64 / n as f64;
        (angle.cos(), angle.sin())
    };

    let mut out = vec![(0.0, 0.0); n / 2];
    for k in 0..(n / 2).saturating_sub(1) {
        let (mut er, mut ei, mut or, mut oi) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for i in 0..n / 2 {
            let (c, s) = w(2 * i * k);
            er += input[2 * i] as f64 * c;
            ei += input[2 * i] as f64 * s;
            let (c, s) = w((2 * i + 1) * k);
            or += input[2 * i + 1] as f64 * c;
            oi += input[2 * i + 1] as f64 * s;
        }
        let (c, s) = w(k);
        out[k] = (er + c * or - s * oi, ei + c * oi + s * or);
    }
    out
}

pub fn to_complex(values: &[(f64, f64)]) -> Vec<Complex32> {
    values
        .iter()
        .map(|&(re, im)| Complex32::new(re as f32, im as f32))
        .collect()
}
