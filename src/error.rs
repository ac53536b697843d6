//! Error taxonomy shared by every complexity engine
//!
//! All failures are deterministic: they are surfaced to the caller as soon as
//! they are detected and never clamped or retried. A distance matrix build
//! aborts on the first failing pair.

use thiserror::Error;

/// Errors for complexity and distance computations
#[derive(Error, Debug)]
pub enum ComplexityError {
    /// Two sequences that must share a length do not
    #[error("Dimension mismatch: expected length {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },

    /// A zero-length sequence was passed where at least one symbol is needed
    #[error("Empty input: {0} requires a non-empty sequence")]
    EmptyInput(&'static str),

    /// Degenerate numeric input (e.g. p in {0, 1} for the random LZ baseline)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Symbols that are not finite discrete values, or an alphabet that cannot grow
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Unrecognized entropy estimator selector
    #[error("Unknown entropy estimator '{0}' (expected ML, MM or JK)")]
    UnknownEstimator(String),

    /// Unrecognized compressor selector
    #[error("Unsupported compressor '{0}'")]
    UnsupportedCompressor(String),

    /// Both inputs compress to zero length, so NCD divides by zero
    #[error("Degenerate input: max(C(a), C(b)) is zero")]
    DegenerateInput,

    /// The external byte compressor failed
    #[error("Compressor failed: {0}")]
    Compressor(#[from] std::io::Error),

    /// The external clustering collaborator failed
    #[error("Linkage failed: {0}")]
    Linkage(String),
}

pub type Result<T> = std::result::Result<T, ComplexityError>;
