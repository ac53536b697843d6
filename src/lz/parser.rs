use crate::error::{ComplexityError, Result};
use crate::symbol::Symbol;
use tracing::trace;

/// Kaspar-Schuster scanner state
///
/// `l` splits the sequence into the already-parsed history `s[..l]` and the
/// part being scanned. `i` is the candidate start of a match inside the
/// history, `k` the current match length and `k_max` the longest match seen
/// since the last phrase boundary.
#[derive(Debug)]
struct Scanner {
    i: usize,
    k: usize,
    l: usize,
    k_max: usize,
    complexity: usize,
    /// Index of the last symbol
    last: usize,
}

enum Step {
    Continue,
    Done,
    /// A phrase was completed and scanning restarts at the new boundary
    NewPhrase,
}

impl Scanner {
    fn new(len: usize) -> Self {
        Self {
            i: 0,
            k: 1,
            l: 1,
            k_max: 1,
            complexity: 1,
            last: len - 1,
        }
    }

    fn step<T: Symbol>(&mut self, s: &[T]) -> Step {
        if s[self.i + self.k - 1] == s[self.l + self.k - 1] {
            self.k += 1;
            if self.l + self.k >= self.last.saturating_sub(1) {
                self.complexity += 1;
                return Step::Done;
            }
            return Step::Continue;
        }

        self.k_max = self.k_max.max(self.k);
        self.i += 1;
        if self.i < self.l {
            self.k = 1;
            return Step::Continue;
        }

        // Every candidate start in the history has been tried
        self.complexity += 1;
        self.l += self.k_max;
        if self.l + 1 > self.last {
            return Step::Done;
        }
        self.i = 0;
        self.k = 1;
        self.k_max = 1;
        Step::NewPhrase
    }
}

fn scan<T: Symbol>(s: &[T], threshold: Option<usize>) -> Result<usize> {
    match s.len() {
        0 => return Err(ComplexityError::EmptyInput("LZ complexity")),
        1 => return Ok(1),
        _ => {}
    }

    let mut scanner = Scanner::new(s.len());
    loop {
        match scanner.step(s) {
            Step::Continue => {}
            Step::Done => break,
            Step::NewPhrase => {
                trace!(boundary = scanner.l, complexity = scanner.complexity, "LZ phrase");
                if threshold.is_some_and(|t| scanner.complexity > t) {
                    break;
                }
            }
        }
    }
    Ok(scanner.complexity)
}

/// Lempel-Ziv-76 complexity of a sequence
///
/// The result is at least 1 and at most `s.len()`.
///
/// # Errors
/// `EmptyInput` for a zero-length sequence.
///
/// # Example
/// ```
/// use spikeplex::lz::lz_complexity;
///
/// // Worked example from Kaspar & Schuster (1987)
/// let s = [1u8, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0];
/// assert_eq!(lz_complexity(&s).unwrap(), 6);
/// ```
pub fn lz_complexity<T: Symbol>(s: &[T]) -> Result<usize> {
    scan(s, None)
}

/// LZ-76 complexity that stops counting once it exceeds `threshold`
///
/// Useful when only "is this sequence more complex than X" matters: long
/// random sequences stop early. When the full count is at most `threshold`
/// the result equals [`lz_complexity`]; otherwise a partial count greater
/// than `threshold` is returned.
pub fn lz_complexity_bounded<T: Symbol>(s: &[T], threshold: usize) -> Result<usize> {
    scan(s, Some(threshold))
}
