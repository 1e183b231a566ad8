//! Master manifest records and their on-disk round-trip.
//!
//! Field identifiers and their order are wire-compatible with the
//! `pluginmaster.json` consumed by Dalamud repo tooling, so the struct
//! declares fields in exactly the order the file carries them and the
//! renderer reproduces the legacy two-space indentation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One entry in the master manifest.
///
/// Every field defaults so partially populated real-world manifests still
/// decode; reconciliation only ever rewrites `assembly_version` and
/// `dalamud_api_level`, the master stays authoritative for the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PluginEntry {
    pub author: String,
    pub name: String,
    pub punchline: String,
    pub description: String,
    pub internal_name: String,
    pub applicable_version: String,
    pub assembly_version: String,
    // Legacy quirk: the master uses camelCase for this one field.
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
    pub icon_url: String,
    pub changelog: String,
    pub tags: Vec<String>,
    pub load_priority: i32,
    pub dalamud_api_level: i32,
    pub download_link_install: String,
}

/// Load the full master manifest. Missing, unreadable, or structurally
/// invalid files are fatal for the run.
pub fn load_master_from_path(path: &Path) -> Result<Vec<PluginEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading master manifest {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing master manifest {}", path.display()))
}

/// Render the manifest the way the legacy tooling wrote it: a two-space
/// indented array, fields in declaration order, no trailing newline.
pub fn render_master(entries: &[PluginEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("serializing master manifest")
}

/// Render and write the manifest in place.
pub fn write_master_to_path(path: &Path, entries: &[PluginEntry]) -> Result<()> {
    let rendered = render_master(entries)?;
    fs::write(path, rendered)
        .with_context(|| format!("writing master manifest {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    fn sample_entry() -> PluginEntry {
        PluginEntry {
            author: "anna".into(),
            name: "Foo".into(),
            punchline: "does foo".into(),
            description: "Foo things.".into(),
            internal_name: "Foo".into(),
            applicable_version: "any".into(),
            assembly_version: "1.0.0".into(),
            repo_url: "https://example.invalid/foo".into(),
            icon_url: "https://example.invalid/foo.png".into(),
            changelog: "initial".into(),
            tags: vec!["utility".into()],
            load_priority: 0,
            dalamud_api_level: 9,
            download_link_install: "https://example.invalid/foo.zip".into(),
        }
    }

    #[test]
    fn render_preserves_field_identifiers_and_order() -> Result<()> {
        let rendered = render_master(&[sample_entry()])?;
        let expected = r#"[
  {
    "Author": "anna",
    "Name": "Foo",
    "Punchline": "does foo",
    "Description": "Foo things.",
    "InternalName": "Foo",
    "ApplicableVersion": "any",
    "AssemblyVersion": "1.0.0",
    "repoUrl": "https://example.invalid/foo",
    "IconUrl": "https://example.invalid/foo.png",
    "Changelog": "initial",
    "Tags": [
      "utility"
    ],
    "LoadPriority": 0,
    "DalamudApiLevel": 9,
    "DownloadLinkInstall": "https://example.invalid/foo.zip"
  }
]"#;
        assert_eq!(rendered, expected);
        Ok(())
    }

    #[test]
    fn round_trips_through_disk() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("pluginmaster.json");
        let entries = vec![sample_entry()];
        write_master_to_path(&path, &entries)?;
        let reloaded = load_master_from_path(&path)?;
        assert_eq!(reloaded, entries);
        Ok(())
    }

    #[test]
    fn missing_fields_decode_to_defaults() -> Result<()> {
        let entries: Vec<PluginEntry> =
            serde_json::from_str(r#"[{"Name": "Bare", "AssemblyVersion": "0.1.0"}]"#)?;
        assert_eq!(entries[0].name, "Bare");
        assert_eq!(entries[0].assembly_version, "0.1.0");
        assert_eq!(entries[0].dalamud_api_level, 0);
        assert!(entries[0].tags.is_empty());
        assert!(entries[0].author.is_empty());
        Ok(())
    }

    #[test]
    fn load_failure_names_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pluginmaster.json");
        fs::write(&path, "not a manifest").unwrap();
        let err = load_master_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("pluginmaster.json"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = load_master_from_path(&temp.path().join("pluginmaster.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading master manifest"));
    }
}
