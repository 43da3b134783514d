use serde::{Deserialize, Serialize};

use crate::core::Value;

/// Search counters. Purely diagnostic: they never feed back into the
/// search and a run with identical inputs produces identical counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Distinct encodings in the table when the search finished (0 with caching off).
    pub table_size: usize,
    /// Nodes the search actually entered.
    pub nodes: u64,
    /// Probes answered from the table.
    pub table_hits: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds another run's counters into this one.
    pub fn merge(&mut self, other: SearchStats) {
        self.table_size += other.table_size;
        self.nodes += other.nodes;
        self.table_hits += other.table_hits;
    }
}

/// What one top-level search returns: the value plus the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub value: Value,
    pub stats: SearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = SearchStats::new();
        assert_eq!(stats.table_size, 0);
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.table_hits, 0);
    }

    #[test]
    fn test_merge_adds_fieldwise() {
        let mut a = SearchStats {
            table_size: 3,
            nodes: 10,
            table_hits: 2,
        };
        let b = SearchStats {
            table_size: 1,
            nodes: 5,
            table_hits: 4,
        };
        a.merge(b);

        assert_eq!(a.table_size, 4);
        assert_eq!(a.nodes, 15);
        assert_eq!(a.table_hits, 6);
    }
}
