//! Minimum circular Hamming distance
//!
//! Two spike trains that encode the same firing pattern with a phase shift
//! should be considered close. For every cyclic offset of `b` against `a`
//! the mismatches are counted; the distance is the smallest count divided
//! by the sequence length.
//!
//! The search is exhaustive (O(L²) per pair, O(N²·L²) for a matrix of N
//! sequences). There is no early exit, so the reported offset is always the
//! first offset attaining the minimum.
//!
//! # Example
//!
//! ```
//! use spikeplex::hamming::min_hamming;
//!
//! let (distance, offset) = min_hamming(&[1u8, 0, 0, 0], &[0u8, 1, 0, 0]).unwrap();
//! assert_eq!(distance, 0.0);
//! assert_eq!(offset, 1);
//! ```

use crate::error::{ComplexityError, Result};
use crate::matrix::DistanceMatrix;
use crate::parallel;
use crate::symbol::Symbol;
use tracing::debug;

/// Minimum Hamming distance over all cyclic rotations of `b`
///
/// Compares `a[i]` against `b[(i + offset) % len]`. Returns the normalized
/// distance in `[0, 1]` and the first offset achieving it.
///
/// # Errors
/// - `EmptyInput` if the sequences are empty
/// - `Dimension` if the lengths differ
pub fn min_hamming<T: Symbol>(a: &[T], b: &[T]) -> Result<(f64, usize)> {
    if a.len() != b.len() {
        return Err(ComplexityError::Dimension {
            expected: a.len(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Err(ComplexityError::EmptyInput("circular Hamming distance"));
    }

    let len = a.len();
    let mut best_count = usize::MAX;
    let mut best_offset = 0;

    for offset in 0..len {
        // b rotated left by `offset` is b[offset..] followed by b[..offset]
        let (tail, head) = b.split_at(offset);
        let mismatches = a
            .iter()
            .zip(head.iter().chain(tail.iter()))
            .filter(|(x, y)| x != y)
            .count();

        if mismatches < best_count {
            best_count = mismatches;
            best_offset = offset;
        }
    }

    Ok((best_count as f64 / len as f64, best_offset))
}

/// Pairwise minimum circular Hamming distances for a set of sequences
///
/// Evaluates every unordered pair once and mirrors the result; the diagonal
/// is 0. Returns the empty matrix when there are no sequences or when every
/// sequence has length 0.
///
/// # Errors
/// `Dimension` if any sequence differs in length from the first.
pub fn pairwise_matrix<T: Symbol, S: AsRef<[T]> + Sync>(
    seqs: &[S],
    threads: usize,
) -> Result<DistanceMatrix> {
    let Some(first) = seqs.first() else {
        return Ok(DistanceMatrix::empty());
    };
    let len = first.as_ref().len();
    for seq in seqs {
        if seq.as_ref().len() != len {
            return Err(ComplexityError::Dimension {
                expected: len,
                actual: seq.as_ref().len(),
            });
        }
    }
    if len == 0 {
        return Ok(DistanceMatrix::empty());
    }

    debug!(sequences = seqs.len(), length = len, "building circular Hamming matrix");

    let mut matrix = parallel::upper_triangle(seqs.len(), false, threads, |i, j| {
        min_hamming(seqs[i].as_ref(), seqs[j].as_ref()).map(|(distance, _)| distance)
    })?;
    matrix.mirror_upper();
    Ok(matrix)
}
