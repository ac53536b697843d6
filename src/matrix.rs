//! Square distance matrices
//!
//! Row-major N×N storage shared by the Hamming and NCD engines, with helpers
//! for mirroring, condensing to the strict upper triangle (the layout
//! hierarchical clustering consumes) and permuting rows/columns.

use crate::error::{ComplexityError, Result};
use serde::{Deserialize, Serialize};

/// N×N matrix of distances, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Zero-filled `size × size` matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// The 0×0 matrix
    pub fn empty() -> Self {
        Self::zeros(0)
    }

    /// Build from row vectors; every row must have `rows.len()` entries
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(ComplexityError::Dimension {
                    expected: size,
                    actual: row.len(),
                });
            }
            values.extend(row);
        }
        Ok(Self { size, values })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.size + col] = value;
    }

    /// Row `row` as a slice
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Iterator over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.values.chunks(self.size.max(1))
    }

    /// Flat row-major values
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Copy the upper triangle onto the lower triangle
    pub fn mirror_upper(&mut self) {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let v = self.get(i, j);
                self.set(j, i, v);
            }
        }
    }

    /// True if `M[i][j] == M[j][i]` everywhere
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Strict upper triangle, row by row (`N·(N-1)/2` values)
    pub fn condensed(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.size * self.size.saturating_sub(1) / 2);
        for i in 0..self.size {
            out.extend_from_slice(&self.row(i)[i + 1..]);
        }
        out
    }

    /// Reorder rows and columns: `result[i][j] = self[order[i]][order[j]]`
    ///
    /// `order` must be a permutation of `0..size`.
    pub fn permuted(&self, order: &[usize]) -> Result<Self> {
        validate_permutation(order, self.size)?;
        let mut out = Self::zeros(self.size);
        for (i, &src_i) in order.iter().enumerate() {
            for (j, &src_j) in order.iter().enumerate() {
                out.set(i, j, self.get(src_i, src_j));
            }
        }
        Ok(out)
    }
}

/// Check that `order` is a permutation of `0..size`
pub fn validate_permutation(order: &[usize], size: usize) -> Result<()> {
    if order.len() != size {
        return Err(ComplexityError::Dimension {
            expected: size,
            actual: order.len(),
        });
    }
    let mut seen = vec![false; size];
    for &idx in order {
        if idx >= size || seen[idx] {
            return Err(ComplexityError::Linkage(format!(
                "leaf order is not a permutation of 0..{}: {:?}",
                size, order
            )));
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Inverse of a permutation: `inverse[order[i]] = i`
pub fn inverse_permutation(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; order.len()];
    for (i, &idx) in order.iter().enumerate() {
        inverse[idx] = i;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 0.1, 0.2],
            vec![0.1, 0.0, 0.3],
            vec![0.2, 0.3, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            ComplexityError::Dimension {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_condensed_upper_triangle() {
        assert_eq!(sample().condensed(), vec![0.1, 0.2, 0.3]);
        assert!(DistanceMatrix::empty().condensed().is_empty());
    }

    #[test]
    fn test_mirror_upper() {
        let mut m = DistanceMatrix::zeros(3);
        m.set(0, 1, 0.5);
        m.set(1, 2, 0.25);
        assert!(!m.is_symmetric());
        m.mirror_upper();
        assert!(m.is_symmetric());
        assert_eq!(m.get(2, 1), 0.25);
    }

    #[test]
    fn test_permuted_and_inverse() {
        let m = sample();
        let order = vec![2, 0, 1];
        let p = m.permuted(&order).unwrap();
        assert_eq!(p.get(0, 1), m.get(2, 0));
        assert_eq!(p.get(1, 2), m.get(0, 1));

        let back = p.permuted(&inverse_permutation(&order)).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_permuted_rejects_non_permutation() {
        let m = sample();
        assert!(m.permuted(&[0, 0, 1]).is_err());
        assert!(m.permuted(&[0, 1]).is_err());
        assert!(m.permuted(&[0, 1, 3]).is_err());
    }

    #[test]
    fn test_rows_iteration() {
        let m = sample();
        assert_eq!(m.rows().count(), 3);
        assert_eq!(DistanceMatrix::empty().rows().count(), 0);
    }
}
