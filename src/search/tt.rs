use std::collections::HashMap;
use std::hash::Hash;

use crate::core::Value;

/// 探索結果の記録: 値と、その値を得た探索深さ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub value: Value,
    pub depth: usize,
}

/// Transposition table: canonical encoding → best known search result.
///
/// Scoped to a single top-level search and dropped with it. An entry may
/// answer a probe only if it was searched at least as deep as the probe
/// asks for; a shallower entry is a miss, to be overwritten once the
/// deeper result is known.
pub struct TranspositionTable<K> {
    entries: HashMap<K, TableEntry>,
}

impl<K: Eq + Hash> TranspositionTable<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Number of distinct encodings stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up `key` for a search `depth` plies deep. An entry recorded at
    /// a shallower depth cannot substitute and is reported as a miss.
    pub fn probe(&self, key: &K, depth: usize) -> Option<TableEntry> {
        match self.entries.get(key) {
            Some(entry) if entry.depth >= depth => Some(*entry),
            _ => None,
        }
    }

    /// Records `value` as the result of a search `depth` plies deep.
    pub fn store(&mut self, key: K, value: Value, depth: usize) {
        if let Some(entry) = self.entries.get(&key) {
            // 深い結果を浅い結果で上書きしない (keep the deeper entry)
            if depth < entry.depth {
                return;
            }
        }
        self.entries.insert(key, TableEntry { value, depth });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shallow_entry_is_a_miss() {
        let mut tt = TranspositionTable::new(16);
        tt.store(7u64, Value::Finite(42), 1);

        assert_eq!(tt.probe(&7, 3), None);
        assert!(tt.probe(&7, 1).is_some());
        assert!(tt.probe(&7, 0).is_some());
    }

    #[test]
    fn test_write_miss_rewrite_hit() {
        // write at depth 1, query at depth 2 misses, rewrite at depth 2 hits
        let mut tt = TranspositionTable::new(16);
        tt.store(9u64, Value::Finite(-3), 1);
        assert_eq!(tt.probe(&9, 2), None);

        tt.store(9u64, Value::Finite(5), 2);
        let entry = tt.probe(&9, 2).unwrap();
        assert_eq!(entry.value, Value::Finite(5));
        assert_eq!(entry.depth, 2);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_shallow_store_keeps_deep_entry() {
        let mut tt = TranspositionTable::new(16);
        tt.store(7u64, Value::Finite(2), 3);
        tt.store(7u64, Value::Finite(1), 1);

        let entry = tt.probe(&7, 2).unwrap();
        assert_eq!(entry.value, Value::Finite(2));
        assert_eq!(entry.depth, 3);
    }

    #[test]
    fn test_equal_depth_store_replaces() {
        let mut tt = TranspositionTable::new(16);
        tt.store(7u64, Value::Finite(1), 2);
        tt.store(7u64, Value::Finite(8), 2);

        assert_eq!(tt.probe(&7, 2).unwrap().value, Value::Finite(8));
    }

    #[test]
    fn test_distinct_keys_are_distinct_entries() {
        let mut tt = TranspositionTable::new(16);
        assert!(tt.is_empty());

        tt.store(1u64, Value::Finite(10), 2);
        tt.store(2u64, Value::PlusInfinity, 2);

        assert_eq!(tt.len(), 2);
        assert_eq!(tt.probe(&1, 2).unwrap().value, Value::Finite(10));
        assert_eq!(tt.probe(&2, 2).unwrap().value, Value::PlusInfinity);
    }
}
