use crate::common::{FftError, SpectrumProcess};
use alloc::vec::Vec;
use num_complex::Complex32;
use super::engine::TransformEngine;
use super::twiddle::TwiddleTable;

/// An engine bound to one twiddle table, so callers only pass sample blocks.
pub struct RealDft<'a> {
    engine: TransformEngine,
    twiddles: &'a TwiddleTable,
}

impl<'a> RealDft<'a> {
    pub fn new(engine: TransformEngine, twiddles: &'a TwiddleTable) -> Self {
        Self { engine, twiddles }
    }

    /// Number of real samples per block.
    pub fn size(&self) -> usize {
        self.twiddles.size()
    }

    /// Number of output bins per block.
    pub fn bins(&self) -> usize {
        self.twiddles.size() / 2
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn process_to_vec(&self, input: &[f32]) -> Result<Vec<Complex32>, FftError> {
        self.engine.transform(input, self.twiddles)
    }
}

impl<'a> SpectrumProcess for RealDft<'a> {
    fn process(&self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError> {
        self.engine.transform_into(input, self.twiddles, output)
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
