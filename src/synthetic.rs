//! Synthetic spike trains
//!
//! Seeded Bernoulli trains and tiled repeats for calibrating the complexity
//! measures: a random train sits near the LZ random baseline, a tiled train
//! plateaus once the tile starts repeating.

use crate::error::{ComplexityError, Result};
use crate::symbol::Symbol;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ComplexityError::Domain(format!(
            "firing probability must lie within [0, 1], got {}",
            p
        )));
    }
    Ok(())
}

fn draw<R: Rng>(rng: &mut R, len: usize, p: f64) -> Vec<u8> {
    (0..len).map(|_| u8::from(rng.gen_bool(p))).collect()
}

/// Binary train of `len` independent Bernoulli(`p`) symbols
///
/// The same `seed` always yields the same train.
///
/// # Errors
/// `Domain` if `p` is not within [0, 1].
pub fn bernoulli_train(len: usize, p: f64, seed: u64) -> Result<Vec<u8>> {
    check_probability(p)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(draw(&mut rng, len, p))
}

/// `count` independent Bernoulli trains drawn in turn from one seeded generator
///
/// The first train equals `bernoulli_train(len, p, seed)`.
pub fn bernoulli_trains(count: usize, len: usize, p: f64, seed: u64) -> Result<Vec<Vec<u8>>> {
    check_probability(p)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count).map(|_| draw(&mut rng, len, p)).collect())
}

/// `pattern` repeated `repeats` times
pub fn tiled<T: Symbol>(pattern: &[T], repeats: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(pattern.len() * repeats);
    for _ in 0..repeats {
        out.extend_from_slice(pattern);
    }
    out
}
