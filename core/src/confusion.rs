//! Substitution-cost tables for confusable token pairs.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::{MohuError, Result};

/// Sparse symmetric table of substitution costs for confusable tokens.
///
/// Costs live in (0, 1]: identical tokens implicitly cost 0, unlisted pairs
/// cost 1, so a listed pair is always at least as cheap as a plain
/// substitution. The table is direction-free; when a source lists both
/// directions with different costs, the cheaper one wins.
#[derive(Debug, Clone, Default)]
pub struct ConfusionTable {
    costs: HashMap<(String, String), f32>,
}

impl ConfusionTable {
    /// Create an empty table (every substitution costs 1).
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Build a table from nested `{a: {b: cost}}` entries.
    ///
    /// Costs outside (0, 1] are rejected.
    pub fn from_entries(entries: &HashMap<String, HashMap<String, f32>>) -> Result<Self> {
        let mut table = Self::new();
        for (a, row) in entries {
            for (b, &cost) in row {
                if !(cost > 0.0 && cost <= 1.0) {
                    return Err(MohuError::invalid_argument(
                        "cost",
                        format!("substitution cost {cost} for ({a}, {b}) outside (0, 1]"),
                    ));
                }
                table.insert(a, b, cost);
            }
        }
        Ok(table)
    }

    /// Load a table from a JSON file with the `{a: {b: cost}}` schema.
    ///
    /// An unreadable file or malformed JSON is fatal; use an absent path at
    /// the call site for "no confusion data".
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let entries: HashMap<String, HashMap<String, f32>> = serde_json::from_str(&content)?;
        Self::from_entries(&entries).map_err(|e| match e {
            MohuError::InvalidArgument { msg, .. } => {
                MohuError::invalid_data(path.display().to_string(), msg)
            }
            other => other,
        })
    }

    /// Record a cost for the unordered pair `(a, b)`, keeping the minimum of
    /// any previously recorded cost for the same pair.
    pub fn insert(&mut self, a: &str, b: &str, cost: f32) {
        if a == b {
            return;
        }
        let key = Self::pair_key(a, b);
        let slot = self.costs.entry(key).or_insert(cost);
        if cost < *slot {
            *slot = cost;
        }
    }

    /// Substitution cost for replacing `a` with `b`.
    ///
    /// Returns 0 for equal tokens, the recorded cost for listed pairs and 1
    /// otherwise. Never exceeds 1.
    pub fn lookup(&self, a: &str, b: &str) -> f32 {
        if a == b {
            return 0.0;
        }
        self.costs
            .get(&Self::pair_key(a, b))
            .copied()
            .unwrap_or(1.0)
    }

    /// Number of confusable pairs recorded.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// True when no pairs are recorded.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    // Unordered pairs are stored under a canonical key so symmetry holds by
    // construction.
    fn pair_key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_defaults() {
        let table = ConfusionTable::new();
        assert_eq!(table.lookup("a", "b"), 1.0);
        assert_eq!(table.lookup("a", "a"), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn insert_and_lookup_is_symmetric() {
        let mut table = ConfusionTable::new();
        table.insert("zh", "z", 0.2);
        assert_eq!(table.lookup("zh", "z"), 0.2);
        assert_eq!(table.lookup("z", "zh"), 0.2);
    }

    #[test]
    fn asymmetric_entries_keep_minimum() {
        let mut entries: HashMap<String, HashMap<String, f32>> = HashMap::new();
        entries
            .entry("b".into())
            .or_default()
            .insert("p".into(), 0.5);
        entries
            .entry("p".into())
            .or_default()
            .insert("b".into(), 0.3);
        let table = ConfusionTable::from_entries(&entries).unwrap();
        assert_eq!(table.lookup("b", "p"), 0.3);
        assert_eq!(table.lookup("p", "b"), 0.3);
    }

    #[test]
    fn self_pairs_are_ignored() {
        let mut table = ConfusionTable::new();
        table.insert("a", "a", 0.4);
        assert_eq!(table.lookup("a", "a"), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn out_of_range_cost_is_rejected() {
        for bad in [0.0, -0.5, 1.5] {
            let mut entries: HashMap<String, HashMap<String, f32>> = HashMap::new();
            entries
                .entry("a".into())
                .or_default()
                .insert("b".into(), bad);
            assert!(ConfusionTable::from_entries(&entries).is_err());
        }
    }
}
