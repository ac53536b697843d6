use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use fnv::FnvHashMap;

/// Per-order context tables for orders `0..=k`
///
/// Each order maps a context (the last `o` symbols, oldest first) to the
/// frequencies of the symbols that followed it. The order -1 context is not
/// stored: it always holds frequency 1 for every symbol of the alphabet and
/// never changes, so the model derives it from the alphabet size.
#[derive(Debug, Clone)]
pub struct ContextTable<T> {
    orders: Vec<FnvHashMap<Vec<T>, FrequencyTable<T>>>,
}

impl<T: Symbol> ContextTable<T> {
    /// Empty tables for orders `0..=max_order`
    pub fn new(max_order: usize) -> Self {
        Self {
            orders: (0..=max_order).map(|_| FnvHashMap::default()).collect(),
        }
    }

    /// Highest order tracked
    pub fn max_order(&self) -> usize {
        self.orders.len() - 1
    }

    /// Frequencies observed after `context` (its length selects the order)
    pub fn get(&self, context: &[T]) -> Option<&FrequencyTable<T>> {
        self.orders.get(context.len())?.get(context)
    }

    /// Record `symbol` after every suffix of `context`, shortest included
    ///
    /// Suffixes longer than the maximum order are ignored.
    pub fn update(&mut self, symbol: T, context: &[T]) {
        for start in 0..=context.len() {
            let suffix = &context[start..];
            let Some(table) = self.orders.get_mut(suffix.len()) else {
                continue;
            };
            match table.get_mut(suffix) {
                Some(freqs) => freqs.increment(symbol),
                None => {
                    let mut freqs = FrequencyTable::new();
                    freqs.increment(symbol);
                    table.insert(suffix.to_vec(), freqs);
                }
            }
        }
    }

    /// Number of distinct contexts stored at `order`
    pub fn contexts_at(&self, order: usize) -> usize {
        self.orders.get(order).map_or(0, |t| t.len())
    }
}
