//! Symbol alphabet abstraction
//!
//! Every engine works over sequences of fixed-width integers. Binary spike
//! trains are the common case (`u8` holding 0/1), but any discrete alphabet
//! that is comparable and hashable is accepted.

use crate::error::{ComplexityError, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// A discrete, hashable sequence symbol
pub trait Symbol: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Numeric value of the symbol (used for sequence means)
    fn to_f64(self) -> f64;

    /// The symbol one greater than `self`, if representable
    fn successor(self) -> Option<Self>;

    /// Append the little-endian byte representation of the symbol
    fn write_le_bytes(self, out: &mut Vec<u8>);

    /// Append the decimal text of the symbol
    fn write_decimal(self, out: &mut Vec<u8>);
}

macro_rules! impl_symbol {
    ($($t:ty),* $(,)?) => {
        $(
            impl Symbol for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn write_le_bytes(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn write_decimal(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(self.to_string().as_bytes());
                }
            }
        )*
    };
}

impl_symbol!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Arithmetic mean of the symbol values (fraction of ones for binary trains)
pub fn mean<T: Symbol>(seq: &[T]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    seq.iter().map(|s| s.to_f64()).sum::<f64>() / seq.len() as f64
}

/// Serialize a sequence into bytes for an external byte compressor
pub fn to_bytes<T: Symbol>(seq: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len() * std::mem::size_of::<T>());
    for &s in seq {
        s.write_le_bytes(&mut out);
    }
    out
}

/// Serialize a sequence as concatenated decimal text (`[1, 0, 12]` -> `b"1012"`)
pub fn to_ascii_digits<T: Symbol>(seq: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &s in seq {
        s.write_decimal(&mut out);
    }
    out
}

/// Concatenate two sequences into a new owned sequence
pub fn concat<T: Symbol>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Convert floating-point samples to integer symbols
///
/// Fails with `InvalidAlphabet` if any sample is non-finite or has a
/// fractional part, since those cannot be treated as discrete symbols.
pub fn discretize(samples: &[f64]) -> Result<Vec<i64>> {
    samples
        .iter()
        .enumerate()
        .map(|(idx, &x)| {
            if !x.is_finite() {
                return Err(ComplexityError::InvalidAlphabet(format!(
                    "non-finite sample {} at index {}",
                    x, idx
                )));
            }
            if x.fract() != 0.0 || x.abs() >= i64::MAX as f64 {
                return Err(ComplexityError::InvalidAlphabet(format!(
                    "non-integral sample {} at index {}",
                    x, idx
                )));
            }
            Ok(x as i64)
        })
        .collect()
}
