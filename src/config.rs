// src/config.rs

use crate::common::FftError;
#[cfg(any(feature = "std", test))]
use alloc::string::String;
use core::str::FromStr;

/// Which evaluation strategy the engine runs for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Literal reference routine: the odd partial sum is indexed by `(2n+1)k`
    /// and then rotated again by `W[k]`. Kept for output parity only.
    Reference,
    /// Even/odd split with both partial sums indexed by `2nk`. O(N²/4), exact DFT.
    #[default]
    SplitSum,
    /// Iterative radix-2 decimation-in-time network. O(N log N), power-of-two N only.
    Radix2,
}

impl FromStr for Algorithm {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reference" => Ok(Algorithm::Reference),
            "split-sum" | "split_sum" => Ok(Algorithm::SplitSum),
            "radix2" | "radix-2" => Ok(Algorithm::Radix2),
            _ => Err(FftError::UnknownOption),
        }
    }
}

/// How many of the N/2 output slots get computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BinRange {
    /// Every bin `0..N/2`.
    #[default]
    Full,
    /// Bins `0..N/2-1`; the last slot stays zero like the reference buffer.
    Reference,
}

impl FromStr for BinRange {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full" => Ok(BinRange::Full),
            "reference" => Ok(BinRange::Reference),
            _ => Err(FftError::UnknownOption),
        }
    }
}

impl BinRange {
    /// Number of bins actually evaluated for a transform of size `n`.
    pub fn computed(self, n: usize) -> usize {
        match self {
            BinRange::Full => n / 2,
            BinRange::Reference => (n / 2).saturating_sub(1),
        }
    }
}

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub bins: BinRange,
    /// Smallest N for which the split-sum bins fan out over the rayon pool.
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            bins: BinRange::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Bit-parity preset: reference summation and the reference bin bound.
    pub fn reference() -> Self {
        Self {
            algorithm: Algorithm::Reference,
            bins: BinRange::Reference,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_bins(mut self, bins: BinRange) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Reads `SPLIT_DFT_ALGORITHM`, `SPLIT_DFT_BINS` and
    /// `SPLIT_DFT_PARALLEL_THRESHOLD`. Values that fail to parse are logged
    /// and replaced by the defaults.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `get(key)`; blank values count as unset.
    #[cfg(any(feature = "std", test))]
    pub(crate) fn from_lookup<G>(get: G) -> Self
    where
        G: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = value_of("SPLIT_DFT_ALGORITHM") {
            match value.parse() {
                Ok(algorithm) => config.algorithm = algorithm,
                Err(_) => tracing::warn!(%value, "unknown SPLIT_DFT_ALGORITHM, using default"),
            }
        }
        if let Some(value) = value_of("SPLIT_DFT_BINS") {
            match value.parse() {
                Ok(bins) => config.bins = bins,
                Err(_) => tracing::warn!(%value, "unknown SPLIT_DFT_BINS, using default"),
            }
        }
        if let Some(value) = value_of("SPLIT_DFT_PARALLEL_THRESHOLD") {
            match value.trim().parse::<usize>() {
                Ok(threshold) => config.parallel_threshold = threshold,
                Err(_) => {
                    tracing::warn!(%value, "invalid SPLIT_DFT_PARALLEL_THRESHOLD, using default")
                }
            }
        }

        config
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
