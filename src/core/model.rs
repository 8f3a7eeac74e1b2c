//! Word frequency data model

use serde::Serialize;
use std::collections::HashMap;

/// Occurrence counts of accepted tokens, plus the running total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of an accepted token
    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for a token, zero if never seen
    #[cfg(test)]
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of accepted tokens across the whole document
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

/// A token together with its count, as produced by ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPair {
    pub token: String,
    pub count: u64,
}

impl RankedPair {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tracks_counts_and_total() {
        let mut table = FrequencyTable::new();
        table.add("cat".into());
        table.add("cat".into());
        table.add("mat".into());

        assert_eq!(table.get("cat"), 2);
        assert_eq!(table.get("mat"), 1);
        assert_eq!(table.get("dog"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
