//! Position index over the master manifest.
//!
//! Reconciliation resolves manifests by `Name`; the index replaces a repeated
//! linear scan with a single lookup while keeping the legacy duplicate-name
//! semantics: when two entries share a name, the earliest position stays the
//! winner.

use crate::master::PluginEntry;
use std::collections::BTreeMap;

/// Map from entry `Name` to its position in the master, built once per run.
#[derive(Debug, Default)]
pub struct EntryIndex {
    by_name: BTreeMap<String, usize>,
}

impl EntryIndex {
    /// Build the index in master order. The first occurrence of a name wins;
    /// later duplicates are never inserted.
    pub fn build(entries: &[PluginEntry]) -> Self {
        let mut by_name = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_insert(position);
        }
        Self { by_name }
    }

    /// Position of the entry named `name`, if any. Exact, case-sensitive
    /// match; callers decide how to surface a miss.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}
