// src/common.rs

use num_complex::Complex32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    InvalidSize,
    SizeMismatch,
    NotPowerOfTwo,
    UnknownOption,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "Transform size must be even and non-zero"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match transform size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2 for the radix-2 path"),
            FftError::UnknownOption => write!(f, "Unrecognised configuration value"),
        }
    }
}

/// Anything that turns a block of real samples into half-spectrum bins.
pub trait SpectrumProcess {
    fn process(&self, input: &[f32], output: &mut [Complex32]) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
