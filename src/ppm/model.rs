use super::context::ContextTable;
use crate::error::{ComplexityError, Result};
use crate::symbol::Symbol;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Context order and output alphabet of a PPM model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpmConfig {
    /// Maximum context length `k` (orders -1..=k are modelled)
    pub order: usize,

    /// Size of the output alphabet; symbols must lie in `0..alphabet_size`
    ///
    /// The order -1 context gives each of these symbols frequency 1, so this
    /// must be the true alphabet size for the bit counts to be meaningful.
    /// 256 reproduces the byte-oriented reference model.
    pub alphabet_size: usize,
}

impl Default for PpmConfig {
    fn default() -> Self {
        Self {
            order: 3,
            alphabet_size: 256,
        }
    }
}

impl PpmConfig {
    /// Order-3 model over the binary alphabet {0, 1}
    pub fn binary() -> Self {
        Self {
            order: 3,
            alphabet_size: 2,
        }
    }
}

/// Adaptive order-k context model accumulating self-information
///
/// A model is single-owner state: its tables grow with every observed
/// symbol. [`compressed_bits`] builds a fresh model per call; keep a
/// `PpmModel` around only when costs must accumulate across inputs.
///
/// # Example
/// ```
/// use spikeplex::ppm::{PpmConfig, PpmModel};
///
/// let mut model = PpmModel::new(PpmConfig::binary());
/// let bits = model.observe(&[0u8, 0, 0, 0]).unwrap();
/// assert_eq!(bits, 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct PpmModel<T> {
    config: PpmConfig,
    contexts: ContextTable<T>,
    /// Up to `order` most recent symbols, oldest first
    history: Vec<T>,
    total_bits: f64,
    symbols_seen: usize,
}

impl<T: Symbol> PpmModel<T> {
    pub fn new(config: PpmConfig) -> Self {
        Self {
            config,
            contexts: ContextTable::new(config.order),
            history: Vec::with_capacity(config.order),
            total_bits: 0.0,
            symbols_seen: 0,
        }
    }

    pub fn config(&self) -> &PpmConfig {
        &self.config
    }

    /// Bits accumulated over every symbol observed so far
    pub fn total_bits(&self) -> f64 {
        self.total_bits
    }

    /// Number of symbols observed so far
    pub fn symbols_seen(&self) -> usize {
        self.symbols_seen
    }

    pub fn contexts(&self) -> &ContextTable<T> {
        &self.contexts
    }

    fn check_symbol(&self, symbol: T) -> Result<()> {
        let value = symbol.to_f64();
        if value < 0.0 || value >= self.config.alphabet_size as f64 {
            return Err(ComplexityError::InvalidAlphabet(format!(
                "symbol {:?} outside PPM alphabet 0..{}",
                symbol, self.config.alphabet_size
            )));
        }
        Ok(())
    }

    /// Self-information (bits) of `symbol` following `context`
    ///
    /// Starts at the order of `context` and walks down. Where a context
    /// exists but has never seen the symbol, the escape costs
    /// `-log2(distinct / (distinct + total))` and that context's symbols
    /// are excluded from every lower order. Missing contexts are skipped at
    /// no cost. Order -1 assigns equal frequency to every symbol of the
    /// alphabet that has not been excluded.
    pub fn predict(&self, symbol: T, context: &[T]) -> Result<f64> {
        self.check_symbol(symbol)?;

        let mut excluded: FnvHashSet<T> = FnvHashSet::default();
        let mut bits = 0.0;
        let mut ctx = context;

        loop {
            if let Some(freqs) = self.contexts.get(ctx) {
                let mut distinct = 0u64;
                let mut total = 0u64;
                for (key, count) in freqs.iter() {
                    if !excluded.contains(key) {
                        distinct += 1;
                        total += count;
                    }
                }

                let freq = if excluded.contains(&symbol) {
                    0
                } else {
                    freqs.get(&symbol)
                };
                if freq > 0 {
                    bits -= (freq as f64 / (distinct + total) as f64).log2();
                    return Ok(bits);
                }
                if total > 0 {
                    bits -= (distinct as f64 / (distinct + total) as f64).log2();
                }
                excluded.extend(freqs.iter().map(|(key, _)| *key));
            }

            match ctx.split_first() {
                Some((_, shorter)) => ctx = shorter,
                None => break,
            }
        }

        // Order -1: every non-excluded alphabet symbol has frequency 1
        let remaining = self.config.alphabet_size.saturating_sub(excluded.len());
        if remaining == 0 {
            return Err(ComplexityError::InvalidAlphabet(format!(
                "every symbol of the PPM alphabet 0..{} was excluded",
                self.config.alphabet_size
            )));
        }
        bits += (remaining as f64).log2();
        Ok(bits)
    }

    /// Count `symbol` in every suffix of `context`
    pub fn update(&mut self, symbol: T, context: &[T]) -> Result<()> {
        self.check_symbol(symbol)?;
        self.contexts.update(symbol, context);
        Ok(())
    }

    /// Predict-then-update every symbol of `seq`, continuing from the
    /// model's current state, and return the bits spent on `seq`
    ///
    /// Observing `s` then `t` on one model costs exactly what observing
    /// their concatenation costs.
    pub fn observe(&mut self, seq: &[T]) -> Result<f64> {
        let order = self.config.order;
        let mut bits = 0.0;
        for &symbol in seq {
            let cost = self.predict(symbol, &self.history)?;
            self.contexts.update(symbol, &self.history);

            bits += cost;
            if order > 0 {
                if self.history.len() == order {
                    self.history.remove(0);
                }
                self.history.push(symbol);
            }
        }
        self.total_bits += bits;
        self.symbols_seen += seq.len();
        Ok(bits)
    }
}

/// Estimated compressed length of `seq` in bits under a fresh PPM model
///
/// # Errors
/// `InvalidAlphabet` if a symbol lies outside `0..config.alphabet_size`.
pub fn compressed_bits<T: Symbol>(seq: &[T], config: PpmConfig) -> Result<f64> {
    let mut model = PpmModel::new(config);
    let bits = model.observe(seq)?;
    debug!(
        length = seq.len(),
        order = config.order,
        alphabet = config.alphabet_size,
        bits,
        "PPM compressed length"
    );
    Ok(bits)
}
