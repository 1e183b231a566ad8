//! Plugin directory discovery.
//!
//! Walks the immediate children of the working directory, skips hidden
//! entries, and loads one plugin manifest per remaining subdirectory. A
//! directory named `Foo` must carry its manifest at `Foo/Foo.json`; a
//! missing or malformed manifest aborts the whole run rather than degrading
//! to a partial reconcile.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_EXTENSION: &str = "json";

/// Per-plugin manifest as shipped next to the plugin assembly. Read-only
/// input: only `name`, `assembly_version`, and `dalamud_api_level` feed the
/// reconcile pass, the remaining fields are decoded and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PluginManifest {
    pub author: String,
    pub name: String,
    pub internal_name: String,
    pub assembly_version: String,
    pub description: String,
    pub applicable_version: String,
    pub repo_url: String,
    pub tags: Vec<String>,
    pub dalamud_api_level: i32,
    pub load_required_state: i32,
    pub load_sync: bool,
    pub can_unload_async: bool,
    pub load_priority: i32,
    pub icon_url: String,
    pub punchline: String,
    pub changelog: String,
    pub accepts_feedback: bool,
}

/// One successfully loaded manifest, paired with its source directory.
#[derive(Debug, Clone)]
pub struct DiscoveredPlugin {
    pub dir_name: String,
    pub manifest_path: PathBuf,
    pub manifest: PluginManifest,
}

/// Enumerate the immediate children of `root` and load each subdirectory's
/// manifest.
///
/// Depth is exactly one: candidate directories are recorded, never descended
/// into. Entries whose name starts with `.` are skipped outright, files and
/// directories alike. Results come back in filesystem enumeration order,
/// which is not guaranteed sorted.
pub fn discover_manifests(root: &Path) -> Result<Vec<DiscoveredPlugin>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("reading plugin directory {}", root.display()))?;

    let mut discovered = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("reading plugin directory {}", root.display()))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            bail!(
                "plugin directory {} contains a non-UTF-8 entry name",
                root.display()
            );
        };
        if name.starts_with('.') {
            continue;
        }
        let file_type = entry
            .file_type()
            .with_context(|| format!("inspecting {}", entry.path().display()))?;
        if !file_type.is_dir() {
            continue;
        }

        let manifest_path = entry
            .path()
            .join(format!("{name}.{MANIFEST_EXTENSION}"));
        let manifest = load_manifest_from_path(&manifest_path)?;
        discovered.push(DiscoveredPlugin {
            dir_name: name.to_string(),
            manifest_path,
            manifest,
        });
    }
    Ok(discovered)
}

fn load_manifest_from_path(path: &Path) -> Result<PluginManifest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading plugin manifest {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing plugin manifest {}", path.display()))
}
