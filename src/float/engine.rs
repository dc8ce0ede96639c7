use crate::common::FftError;
use crate::config::{Algorithm, EngineConfig};
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex32;
use super::core::{next_residue, radix_2_dit_fft_core};
use super::twiddle::TwiddleTable;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const ZERO: Complex32 = Complex32::new(0.0, 0.0);

/// Turns blocks of `N` real samples into `N/2` complex bins using a shared
/// [`TwiddleTable`] built for the same `N`.
///
/// The engine holds no per-size state, so one instance can serve tables of
/// different sizes, from several threads at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformEngine {
    config: EngineConfig,
}

impl TransformEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Transforms `input` and returns a fresh block of `N/2` bins.
    pub fn transform(&self, input: &[f32], twiddles: &TwiddleTable) -> Result<Vec<Complex32>, FftError> {
        let mut output = vec![ZERO; twiddles.size() / 2];
        self.transform_into(input, twiddles, &mut output)?;
        Ok(output)
    }

    /// Transforms `input` into a caller-owned `output` of exactly `N/2` bins.
    ///
    /// Sizes are validated before anything is written, so `output` is left
    /// untouched on error. Slots past the configured bin range are zeroed.
    pub fn transform_into(
        &self,
        input: &[f32],
        twiddles: &TwiddleTable,
        output: &mut [Complex32],
    ) -> Result<(), FftError> {
        let n = twiddles.size();
        if input.len() != n || output.len() != n / 2 {
            return Err(FftError::SizeMismatch);
        }
        let bitrev: &[usize] = match self.config.algorithm {
            Algorithm::Radix2 => twiddles.bitrev().ok_or(FftError::NotPowerOfTwo)?,
            _ => &[],
        };

        let computed = self.config.bins.computed(n);
        tracing::debug!(
            n,
            computed,
            algorithm = ?self.config.algorithm,
            "transforming block"
        );

        let (head, tail) = output.split_at_mut(computed);
        tail.fill(ZERO);

        let table = twiddles.as_slice();
        match self.config.algorithm {
            Algorithm::Reference => self.fill_bins(n, head, |k| reference_bin(input, table, k)),
            Algorithm::SplitSum => self.fill_bins(n, head, |k| split_sum_bin(input, table, k)),
            Algorithm::Radix2 => radix2_bins(input, table, bitrev, head),
        }

        Ok(())
    }

    /// Evaluates `bin(k)` for every slot. Bins are independent, so above the
    /// configured threshold they fan out over the rayon pool.
    #[cfg(feature = "parallel")]
    fn fill_bins<F>(&self, n: usize, head: &mut [Complex32], bin: F)
    where
        F: Fn(usize) -> Complex32 + Sync,
    {
        if n >= self.config.parallel_threshold {
            head.par_iter_mut()
                .enumerate()
                .for_each(|(k, out)| *out = bin(k));
        } else {
            fill_sequential(head, bin);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn fill_bins<F>(&self, _n: usize, head: &mut [Complex32], bin: F)
    where
        F: Fn(usize) -> Complex32 + Sync,
    {
        fill_sequential(head, bin);
    }
}

fn fill_sequential<F>(head: &mut [Complex32], bin: F)
where
    F: Fn(usize) -> Complex32,
{
    for (k, out) in head.iter_mut().enumerate() {
        *out = bin(k);
    }
}

/// One bin of the reference routine. The odd partial sum is indexed by
/// `(2n+1)k` and then rotated by `W[k]` once more.
fn reference_bin(input: &[f32], twiddles: &[Complex32], k: usize) -> Complex32 {
    let n = input.len();
    let step = next_residue(k, k, n);
    let mut even = ZERO;
    let mut odd = ZERO;
    // 2ik mod n; the odd index (2i+1)k is one more k past it.
    let mut idx = 0;

    for i in 0..(n / 2) {
        even += twiddles[idx].scale(input[2 * i]);
        odd += twiddles[next_residue(idx, k, n)].scale(input[2 * i + 1]);
        idx = next_residue(idx, step, n);
    }

    even + twiddles[k] * odd
}

/// One bin of the even/odd split: `E[k] + W[k]·O[k]`, both halves indexed by `2nk`.
fn split_sum_bin(input: &[f32], twiddles: &[Complex32], k: usize) -> Complex32 {
    let n = input.len();
    let step = next_residue(k, k, n);
    let mut even = ZERO;
    let mut odd = ZERO;
    let mut idx = 0;

    for i in 0..(n / 2) {
        let w = twiddles[idx];
        even += w.scale(input[2 * i]);
        odd += w.scale(input[2 * i + 1]);
        idx = next_residue(idx, step, n);
    }

    even + twiddles[k] * odd
}

/// Full-length radix-2 pass on the real block lifted to complex, keeping the first bins.
fn radix2_bins(input: &[f32], twiddles: &[Complex32], bitrev: &[usize], head: &mut [Complex32]) {
    let mut buffer: Vec<Complex32> = input.iter().map(|&x| Complex32::new(x, 0.0)).collect();

    radix_2_dit_fft_core(&mut buffer, twiddles, bitrev);

    head.copy_from_slice(&buffer[..head.len()]);
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
