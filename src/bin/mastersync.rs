//! Refresh the plugin master manifest from the plugin directories beside it.
//!
//! Runs against the current working directory: loads `pluginmaster.json`,
//! loads every `<Dir>/<Dir>.json` manifest one level down, copies each
//! manifest's `AssemblyVersion` and `DalamudApiLevel` onto the master entry
//! with the same `Name`, and writes the master back in place. Manifests
//! without a master entry are reported on stderr and skipped; any unreadable
//! or malformed file aborts the run before the master is rewritten.

use anyhow::{Context, Result};
use clap::Parser;
use mastersync::{
    MASTER_FILE_NAME, discover_manifests, load_master_from_path, reconcile,
    write_master_to_path,
};
use std::env;

#[derive(Parser, Debug)]
#[command(name = "mastersync", version)]
#[command(about = "Refresh a Dalamud plugin master manifest from the plugin manifests on disk")]
struct Cli {}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let root = env::current_dir().context("resolving working directory")?;
    let master_path = root.join(MASTER_FILE_NAME);

    // The master must load before any manifest is read; discovery failures in
    // turn abort before anything is written back.
    let mut entries = load_master_from_path(&master_path)?;
    let discovered = discover_manifests(&root)?;
    let report = reconcile(&mut entries, &discovered);

    for unmatched in &report.unmatched {
        eprintln!(
            "warning: plugin '{}' (from {}/) is not listed in {}",
            unmatched.name, unmatched.dir_name, MASTER_FILE_NAME
        );
    }

    write_master_to_path(&master_path, &entries)?;
    println!(
        "{} updated: {} of {} manifest(s) applied",
        MASTER_FILE_NAME,
        report.updated,
        discovered.len()
    );
    Ok(())
}
