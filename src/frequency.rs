//! Insertion-ordered frequency tables
//!
//! Counts are kept in first-seen order so that every derived quantity
//! (entropy sums, most-frequent-pair selection) is reproducible bit for bit
//! across runs, independent of hash seeds.

use fnv::FnvHashMap;
use std::hash::Hash;

/// Mapping from key (symbol or symbol pair) to a non-negative count
///
/// Counts only ever grow during the lifetime of a table.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    /// Fast lookup: key → slot in `entries`
    index: FnvHashMap<K, usize>,

    /// (key, count) in order of first observation
    entries: Vec<(K, u64)>,

    /// Sum of all counts
    total: u64,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: FnvHashMap::default(),
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every item of an iterator
    pub fn from_iter_counts<I: IntoIterator<Item = K>>(items: I) -> Self {
        let mut table = Self::new();
        for item in items {
            table.increment(item);
        }
        table
    }

    /// Increase the count of `key` by one, creating the entry on first use
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Increase the count of `key` by `amount`
    pub fn add(&mut self, key: K, amount: u64) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, amount));
            }
        }
        self.total += amount;
    }

    /// Count recorded for `key` (0 if never seen)
    pub fn get(&self, key: &K) -> u64 {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys observed
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Key with the highest count; ties go to the key observed first
    pub fn most_frequent(&self) -> Option<(K, u64)> {
        let mut best: Option<(K, u64)> = None;
        for &(key, count) in &self.entries {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let table = FrequencyTable::from_iter_counts([3u8, 1, 3, 3, 2]);
        assert_eq!(table.get(&3), 3);
        assert_eq!(table.get(&1), 1);
        assert_eq!(table.get(&9), 0);
        assert_eq!(table.distinct(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_iteration_preserves_first_seen_order() {
        let table = FrequencyTable::from_iter_counts([5u8, 2, 5, 7, 2]);
        let keys: Vec<u8> = table.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![5, 2, 7]);
    }

    #[test]
    fn test_most_frequent_tie_goes_to_first_seen() {
        let table = FrequencyTable::from_iter_counts([(1u8, 0u8), (0, 0), (0, 1)]);
        assert_eq!(table.most_frequent(), Some(((1, 0), 1)));

        let table = FrequencyTable::from_iter_counts([(1u8, 0u8), (0, 1), (0, 1)]);
        assert_eq!(table.most_frequent(), Some(((0, 1), 2)));
    }

    #[test]
    fn test_empty_table() {
        let table: FrequencyTable<u8> = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.most_frequent(), None);
        assert_eq!(table.total(), 0);
    }
}
