pub mod engine;
pub mod real;
pub mod spectrum;
pub mod twiddle;
mod core;

pub use crate::common::{ FftError, SpectrumProcess };
pub use self::core::reduce_index;
pub use engine::TransformEngine;
pub use real::RealDft;
pub use twiddle::TwiddleTable;
