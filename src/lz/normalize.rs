use super::parser::lz_complexity;
use crate::error::{ComplexityError, Result};
use crate::symbol::{mean, Symbol};

/// Binary entropy h(p) in bits
///
/// Returns 0 at p = 0 and p = 1.
pub fn binary_entropy(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Expected LZ-76 complexity of a random binary sequence: h(p)·n/log2(n)
///
/// # Errors
/// `Domain` when `p` is not strictly inside (0, 1) (h(p) would be zero, so
/// normalizing by it is meaningless; pass a smoothed rate instead) or when
/// `n < 2` (log2(n) would be zero).
pub fn random_lz_complexity(n: usize, p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ComplexityError::Domain(format!(
            "firing probability must lie strictly inside (0, 1), got {}",
            p
        )));
    }
    if n < 2 {
        return Err(ComplexityError::Domain(format!(
            "random LZ baseline needs at least 2 symbols, got {}",
            n
        )));
    }
    let n = n as f64;
    Ok(binary_entropy(p) * n / n.log2())
}

/// LZ-76 complexity divided by the random baseline for the sequence's own
/// length and mean
///
/// Values near 1 indicate a sequence as complex as a Bernoulli source with
/// the same rate; values well below 1 indicate structure.
pub fn normalized_lz_complexity<T: Symbol>(s: &[T]) -> Result<f64> {
    let c = lz_complexity(s)?;
    let baseline = random_lz_complexity(s.len(), mean(s))?;
    Ok(c as f64 / baseline)
}
