use crate::error::{GalleryError, Result};
use crate::gallery::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_KEY: &str = "images";
const DEFAULT_SORT: &str = "newest";

/// Configuration for pixdex, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Store key the collection blob lives under
    #[serde(default = "default_store_key")]
    pub store_key: String,

    /// Sort applied when `list` is given no explicit sort
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            store_key: default_store_key(),
            default_sort: default_sort(),
        }
    }
}

impl GalleryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GalleryError::Io)?;
        let config: GalleryConfig =
            serde_json::from_str(&content).map_err(GalleryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GalleryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GalleryError::Serialization)?;
        fs::write(config_path, content).map_err(GalleryError::Io)?;
        Ok(())
    }

    /// The configured default sort, falling back to newest if the stored
    /// string is not a known key.
    pub fn default_sort_key(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_default()
    }

    /// Set the default sort; rejects unknown keys.
    pub fn set_default_sort(&mut self, sort: &str) -> Result<()> {
        let parsed: SortKey = sort
            .parse()
            .map_err(GalleryError::Api)?;
        self.default_sort = parsed.to_string();
        Ok(())
    }

    pub fn set_store_key(&mut self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(GalleryError::Api("Store key cannot be empty".into()));
        }
        self.store_key = key.to_string();
        Ok(())
    }
}
