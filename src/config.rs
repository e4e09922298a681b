use crate::error::{CardzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_BASE_URL: &str = "https://cardz.app/collection";

/// Configuration for cardz, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardzConfig {
    /// Path to the card catalog JSON. Falls back to `cards.json` in the
    /// data directory when unset.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Base URL used when generating share links.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

impl Default for CardzConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            share_base_url: default_share_base_url(),
        }
    }
}

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardzError::Io)?;
        let config: CardzConfig =
            serde_json::from_str(&content).map_err(CardzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CardzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CardzError::Serialization)?;
        fs::write(config_path, content).map_err(CardzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardzConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CardzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, CardzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = CardzConfig {
            catalog_path: Some("/srv/cards.json".into()),
            share_base_url: "https://example.com/c".into(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = CardzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = CardzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, CardzConfig::default());
    }
}
