#![no_std]

// Tables and owned output blocks live on the heap; no_std builds still need an allocator.
extern crate alloc;

// Native float math and std::error::Error come from std when the feature is on.
// Tests always link it so 'cargo test' works on the host.
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod common;
pub mod config;
pub mod float;

pub use common::{FftError, SpectrumProcess};
pub use config::{Algorithm, BinRange, EngineConfig};
pub use float::{RealDft, TransformEngine, TwiddleTable};
