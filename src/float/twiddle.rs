use crate::common::FftError;
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex32;
use super::core::{next_residue, precompute_bitrev, unit_circle};

/// Unit-circle samples for one transform size, keyed by reduced index.
///
/// Entry `i` holds `(cos(2π·i/N), sin(2π·i/N))` once populated. The table is
/// immutable after [`TwiddleTable::build`] and can be shared read-only by any
/// number of transforms running for the same `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    entries: Vec<Complex32>,
    populated: Vec<bool>,
    /// Bit-reversal permutation for the radix-2 path; empty unless `n` is a power of two.
    bitrev: Vec<usize>,
    n: usize,
}

impl TwiddleTable {
    /// Builds the table for an `n`-point transform.
    ///
    /// Walks every `(k, m)` with `k < n`, `m < n/2` and evaluates the circle
    /// once per distinct `k*m mod n`. Residues the walk never reaches stay
    /// zero; for `n = 2` that is every index except 0.
    pub fn build(n: usize) -> Result<Self, FftError> {
        if n == 0 || n % 2 != 0 {
            return Err(FftError::InvalidSize);
        }

        let mut entries = vec![Complex32::new(0.0, 0.0); n];
        let mut populated = vec![false; n];
        let mut count = 0;

        // idx tracks k*m mod n as m advances, so the product is never formed.
        for k in 0..n {
            let mut idx = 0;
            for _ in 0..(n / 2) {
                if !populated[idx] {
                    entries[idx] = unit_circle(idx, n);
                    populated[idx] = true;
                    count += 1;
                }
                idx = next_residue(idx, k, n);
            }
        }

        let mut bitrev = Vec::new();
        if n.is_power_of_two() {
            bitrev.resize(n, 0);
            precompute_bitrev(&mut bitrev, n);
        }

        tracing::debug!(n, populated = count, "twiddle table built");
        Ok(Self { entries, populated, bitrev, n })
    }

    /// Transform size this table was built for.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Complex32> {
        self.entries.get(idx).copied()
    }

    pub fn as_slice(&self) -> &[Complex32] {
        &self.entries
    }

    /// Number of residues the construction walk reached.
    pub fn populated(&self) -> usize {
        self.populated.iter().filter(|&&p| p).count()
    }

    pub fn is_populated(&self, idx: usize) -> bool {
        self.populated.get(idx).copied().unwrap_or(false)
    }

    /// Bit-reversal table, present only for power-of-two sizes.
    pub(crate) fn bitrev(&self) -> Option<&[usize]> {
        if self.bitrev.is_empty() {
            None
        } else {
            Some(&self.bitrev)
        }
    }
}

impl core::ops::Index<usize> for TwiddleTable {
    type Output = Complex32;

    #[inline]
    fn index(&self, idx: usize) -> &Complex32 {
        &self.entries[idx]
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
