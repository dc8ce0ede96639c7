//! Reading a block of bins back as frequencies and magnitudes.

use alloc::vec::Vec;
use num_complex::Complex32;

/// Centre frequency of bin `k` for an `n`-point transform sampled at `sample_rate`.
#[inline]
pub fn bin_frequency(k: usize, sample_rate: f32, n: usize) -> f32 {
    k as f32 * sample_rate / n as f32
}

#[inline]
pub fn magnitude(bin: Complex32) -> f32 {
    libm::sqrtf(bin.norm_sqr())
}

pub fn magnitudes(bins: &[Complex32]) -> Vec<f32> {
    bins.iter().map(|&b| magnitude(b)).collect()
}

/// Index of the loudest bin; the first one wins a tie.
pub fn dominant_bin(bins: &[Complex32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (k, &bin) in bins.iter().enumerate() {
        let power = bin.norm_sqr();
        match best {
            Some((_, p)) if p >= power => {}
            _ => best = Some((k, power)),
        }
    }
    best.map(|(k, _)| k)
}
