//! Parallel evaluation of pairwise distance loops
//!
//! Every `(i, j)` cell of a distance matrix is independent, so rows are
//! dealt round-robin to scoped worker threads (`crossbeam::thread::scope`).
//! Workers share only the read-only inputs; each cell evaluation builds its
//! own model state.

use crate::error::Result;
use crate::matrix::DistanceMatrix;
use tracing::debug;

/// Resolve a requested worker count (0 = available parallelism)
pub fn resolve_threads(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Evaluate `cell(i, j)` for every `i ≤ j` (or `i < j` without the diagonal)
/// and store the results in the upper triangle of an `n × n` matrix
///
/// Cells not evaluated are left at 0. On failure the error of the lowest
/// failing row is returned, so the outcome does not depend on scheduling.
pub fn upper_triangle<F>(
    n: usize,
    include_diagonal: bool,
    threads: usize,
    cell: F,
) -> Result<DistanceMatrix>
where
    F: Fn(usize, usize) -> Result<f64> + Sync,
{
    let workers = resolve_threads(threads).min(n.max(1));
    debug!(n, workers, include_diagonal, "evaluating pairwise upper triangle");

    let first_col = |i: usize| if include_diagonal { i } else { i + 1 };
    let eval_row = |i: usize| -> Result<Vec<f64>> {
        (first_col(i)..n).map(|j| cell(i, j)).collect()
    };

    let mut rows: Vec<(usize, Result<Vec<f64>>)> = if workers <= 1 {
        (0..n).map(|i| (i, eval_row(i))).collect()
    } else {
        let eval_row = &eval_row;
        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    scope.spawn(move |_| {
                        (worker..n)
                            .step_by(workers)
                            .map(|i| (i, eval_row(i)))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        });

        let joined = match joined {
            Ok(joined) => joined,
            Err(payload) => std::panic::resume_unwind(payload),
        };
        let mut rows = Vec::with_capacity(n);
        for worker_rows in joined {
            match worker_rows {
                Ok(worker_rows) => rows.extend(worker_rows),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        rows
    };

    rows.sort_by_key(|(i, _)| *i);

    let mut matrix = DistanceMatrix::zeros(n);
    for (i, row) in rows {
        let start = first_col(i);
        for (offset, value) in row?.into_iter().enumerate() {
            matrix.set(i, start + offset, value);
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComplexityError;

    #[test]
    fn test_resolve_threads() {
        assert_eq!(resolve_threads(3), 3);
        assert!(resolve_threads(0) >= 1);
    }

    #[test]
    fn test_upper_triangle_sequential_matches_parallel() {
        let cell = |i: usize, j: usize| Ok((i * 10 + j) as f64);
        let seq = upper_triangle(7, true, 1, cell).unwrap();
        let par = upper_triangle(7, true, 4, cell).unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq.get(2, 5), 25.0);
        assert_eq!(seq.get(5, 2), 0.0);
        assert_eq!(seq.get(3, 3), 33.0);
    }

    #[test]
    fn test_upper_triangle_without_diagonal() {
        let m = upper_triangle(3, false, 2, |_, _| Ok(1.0)).unwrap();
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 2), 1.0);
    }

    #[test]
    fn test_upper_triangle_reports_lowest_failing_row() {
        let result = upper_triangle(6, true, 3, |i, _| {
            if i >= 2 {
                Err(ComplexityError::Domain(format!("row {}", i)))
            } else {
                Ok(0.0)
            }
        });
        match result {
            Err(ComplexityError::Domain(msg)) => assert_eq!(msg, "row 2"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_upper_triangle_empty() {
        let m = upper_triangle(0, true, 4, |_, _| Ok(1.0)).unwrap();
        assert!(m.is_empty());
    }
}
