//! Single-pass reconciliation of discovered manifests into the master.

use crate::discovery::DiscoveredPlugin;
use crate::master::{EntryIndex, PluginEntry};

/// A structurally valid manifest whose name has no master entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedManifest {
    pub name: String,
    pub dir_name: String,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub updated: usize,
    pub unmatched: Vec<UnmatchedManifest>,
}

/// Propagate the authoritative fields of each discovered manifest onto the
/// master entry with the same `Name`.
///
/// Matching is exact and case-sensitive. Only `assembly_version` and
/// `dalamud_api_level` move; the master stays authoritative for every other
/// field. Manifests without a matching entry are reported, never fatal, and
/// entry count and order are left alone. Updates are keyed by name, so the
/// pass is idempotent and insensitive to discovery order.
pub fn reconcile(
    entries: &mut [PluginEntry],
    discovered: &[DiscoveredPlugin],
) -> ReconcileReport {
    let index = EntryIndex::build(entries);
    let mut report = ReconcileReport::default();
    for plugin in discovered {
        match index.position(&plugin.manifest.name) {
            Some(position) => {
                let entry = &mut entries[position];
                entry.assembly_version = plugin.manifest.assembly_version.clone();
                entry.dalamud_api_level = plugin.manifest.dalamud_api_level;
                report.updated += 1;
            }
            None => report.unmatched.push(UnmatchedManifest {
                name: plugin.manifest.name.clone(),
                dir_name: plugin.dir_name.clone(),
            }),
        }
    }
    report
}
