// src/float/core.rs

use num_complex::Complex32;
use core::f32::consts::PI;

/// Reduces `product` modulo `n` by subtracting whole multiples of `n`.
///
/// The angle `2π·idx/n` repeats every `n` steps, so every product that lands
/// on the same residue shares one table entry. `n` must be non-zero.
#[inline]
pub fn reduce_index(product: usize, n: usize) -> usize {
    if product >= n {
        product - n * (product / n)
    } else {
        product
    }
}

/// Advances residue `idx` by `step` modulo `n` without forming `idx + step`.
///
/// Both inputs must already be below `n`. Walking a product `a*b mod n` this
/// way never builds the product, so it cannot overflow a 32-bit `usize`.
#[inline]
pub(crate) fn next_residue(idx: usize, step: usize, n: usize) -> usize {
    if idx >= n - step {
        idx - (n - step)
    } else {
        idx + step
    }
}

/// Unit-circle sample for residue `idx` of an `n`-point circle: `(cos θ, sin θ)`, `θ = 2π·idx/n`.
pub(crate) fn unit_circle(idx: usize, n: usize) -> Complex32 {
    let angle = 2.0 * PI * (idx as f32) / (n as f32);
    let (sin, cos) = sin_cos(angle);
    Complex32::new(cos, sin)
}

/// Fills the bit-reversal table.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

fn sin_cos(angle: f32) -> (f32, f32) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sinf(angle), libm::cosf(angle));
}

/// Radix-2 decimation-in-time pass over a full complex buffer.
///
/// `twiddles` is the `n`-entry table of a [`TwiddleTable`](super::TwiddleTable);
/// stage `stride` reads entries `i * n / (2 * stride)`, all below `n / 2`.
/// The result carries the table's sign convention, `X[k] = Σ x[j]·e^{+2πi·jk/n}`.
pub(crate) fn radix_2_dit_fft_core(
    buffer: &mut [Complex32],
    twiddles: &[Complex32],
    bitrev: &[usize],
) {
    let n = buffer.len();

    // 1. Bit-reverse
    for i in 1..(n - 1) {
        let j = bitrev[i];
        if i < j {
            buffer.swap(i, j);
        }
    }

    // 2. Butterfly
    let mut stride = 1;
    let mut tw_index = n >> 1;

    while stride < n {
        let jmax = n - stride;

        for j in (0..jmax).step_by(stride << 1) {
            for i in 0..stride {
                let w = twiddles[i * tw_index];

                let index = j + i;
                let a = buffer[index];
                let t = buffer[index + stride] * w;

                buffer[index] = a + t;
                buffer[index + stride] = a - t;
            }
        }
        stride <<= 1;
        tw_index >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
