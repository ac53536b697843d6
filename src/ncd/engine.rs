use super::compressor::Compressor;
use crate::error::{ComplexityError, Result};
use crate::lz::lz_complexity;
use crate::matrix::DistanceMatrix;
use crate::parallel;
use crate::symbol::{concat, Symbol};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Compressed-length proxies of a pair and both of its concatenations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairLengths {
    pub a: f64,
    pub b: f64,
    pub ab: f64,
    pub ba: f64,
}

impl PairLengths {
    /// `(min(C(ab), C(ba)) - min(C(a), C(b))) / max(C(a), C(b))`
    ///
    /// # Errors
    /// `DegenerateInput` when both singles have zero length.
    pub fn distance(&self) -> Result<f64> {
        let max_single = self.a.max(self.b);
        if max_single == 0.0 {
            return Err(ComplexityError::DegenerateInput);
        }
        Ok((self.ab.min(self.ba) - self.a.min(self.b)) / max_single)
    }
}

/// Measure `C(a)`, `C(b)`, `C(ab)` and `C(ba)` under `compressor`
pub fn pair_lengths<T: Symbol>(a: &[T], b: &[T], compressor: &Compressor) -> Result<PairLengths> {
    let a = compressor.prepare(a);
    let b = compressor.prepare(b);
    Ok(PairLengths {
        a: compressor.measure(&a)?,
        b: compressor.measure(&b)?,
        ab: compressor.measure(&concat(&a, &b))?,
        ba: compressor.measure(&concat(&b, &a))?,
    })
}

/// Normalized Compression Distance between two sequences
///
/// Both concatenation orders are compressed and the smaller is used, so the
/// result is symmetric in `a` and `b`. Self-distance is close to, but not
/// guaranteed to be, zero.
///
/// # Example
/// ```
/// use spikeplex::ncd::{ncd, Compressor};
///
/// let a = [0u8, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1];
/// let d = ncd(&a, &a, &Compressor::Lz).unwrap();
/// assert!(d.abs() < 0.5);
/// ```
pub fn ncd<T: Symbol>(a: &[T], b: &[T], compressor: &Compressor) -> Result<f64> {
    pair_lengths(a, b, compressor)?.distance()
}

/// Shape of the matrix returned by [`ncd_matrix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NcdLayout {
    /// Full N×N matrix, lower triangle mirrored from the upper
    #[default]
    Symmetric,
    /// N×N matrix with only `i ≤ j` filled; the lower triangle is 0
    UpperTriangle,
    /// Strict upper triangle flattened row by row
    Condensed,
}

/// NCD values for a set of sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NcdMatrix {
    Square(DistanceMatrix),
    Condensed(Vec<f64>),
}

impl NcdMatrix {
    /// The square matrix, if this is one
    pub fn as_square(&self) -> Option<&DistanceMatrix> {
        match self {
            NcdMatrix::Square(m) => Some(m),
            NcdMatrix::Condensed(_) => None,
        }
    }

    /// The condensed vector, if this is one
    pub fn as_condensed(&self) -> Option<&[f64]> {
        match self {
            NcdMatrix::Square(_) => None,
            NcdMatrix::Condensed(v) => Some(v),
        }
    }
}

/// NCD for every pair `n ≤ m` of `seqs`
///
/// The diagonal holds each sequence's distance to itself, which is not
/// forced to zero. With [`Compressor::Lz`] each sequence's own complexity is
/// computed once up front, so pairs only parse the two concatenations.
///
/// # Errors
/// The first failing pair aborts the whole matrix.
pub fn ncd_matrix<T: Symbol, S: AsRef<[T]> + Sync>(
    seqs: &[S],
    compressor: &Compressor,
    layout: NcdLayout,
    threads: usize,
) -> Result<NcdMatrix> {
    debug!(
        sequences = seqs.len(),
        compressor = %compressor.name(),
        ?layout,
        "building NCD matrix"
    );

    let mut matrix = match compressor {
        Compressor::Lz => {
            let singles = seqs
                .iter()
                .map(|s| lz_complexity(s.as_ref()).map(|c| c as f64))
                .collect::<Result<Vec<f64>>>()?;
            parallel::upper_triangle(seqs.len(), true, threads, |i, j| {
                let (a, b) = (seqs[i].as_ref(), seqs[j].as_ref());
                PairLengths {
                    a: singles[i],
                    b: singles[j],
                    ab: lz_complexity(&concat(a, b))? as f64,
                    ba: lz_complexity(&concat(b, a))? as f64,
                }
                .distance()
            })?
        }
        _ => parallel::upper_triangle(seqs.len(), true, threads, |i, j| {
            ncd(seqs[i].as_ref(), seqs[j].as_ref(), compressor)
        })?,
    };

    Ok(match layout {
        NcdLayout::Symmetric => {
            matrix.mirror_upper();
            NcdMatrix::Square(matrix)
        }
        NcdLayout::UpperTriangle => NcdMatrix::Square(matrix),
        NcdLayout::Condensed => NcdMatrix::Condensed(matrix.condensed()),
    })
}
