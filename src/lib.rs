pub mod discovery;
pub mod master;
pub mod reconcile;

pub use discovery::{DiscoveredPlugin, PluginManifest, discover_manifests};
pub use master::{
    EntryIndex, MASTER_FILE_NAME, PluginEntry, load_master_from_path, render_master,
    write_master_to_path,
};
pub use reconcile::{ReconcileReport, UnmatchedManifest, reconcile};
