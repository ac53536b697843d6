//! spikeplex - Complexity and distance measures for symbolic spike trains
//!
//! This library provides the core estimators used to compare discretized
//! neural recordings: Lempel-Ziv-76 complexity, Effort-To-Compress, entropy
//! estimators with bias correction, PPM bit-length estimation, minimum
//! circular Hamming distance and Normalized Compression Distance matrices.

pub mod cli;
pub mod config;
pub mod entropy;
pub mod error;
pub mod etc;
pub mod frequency;
pub mod hamming;
pub mod input;
pub mod lz;
pub mod matrix;
pub mod ncd;
pub mod output;
pub mod parallel;
pub mod ppm;
pub mod symbol;
pub mod synthetic;

pub use error::{ComplexityError, Result};
pub use symbol::Symbol;
