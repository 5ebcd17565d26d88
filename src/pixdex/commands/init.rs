use crate::commands::{CmdMessage, CmdResult, GalleryPaths};
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::KeyValueStore;

/// Create the data directory, a default config file, and an empty collection
/// blob if none exists yet. Safe to run repeatedly.
pub fn run(paths: &GalleryPaths, store_key: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let config_path = paths.data_dir.join("config.json");
    if !config_path.exists() {
        GalleryConfig::default().save(&paths.data_dir)?;
        result.add_message(CmdMessage::success(format!(
            "Wrote default config to {}",
            config_path.display()
        )));
    }

    let mut store = FileStore::new(paths.data_dir.clone());
    if store.get(store_key)?.is_none() {
        store.set(store_key, "[]")?;
        result.add_message(CmdMessage::success(format!(
            "Initialized empty gallery at {}",
            store.path_for(store_key).display()
        )));
    } else {
        result.add_message(CmdMessage::info("Gallery already initialized."));
    }

    Ok(result)
}
