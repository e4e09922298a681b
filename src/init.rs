use crate::catalog::DEFAULT_CATALOG_FILENAME;
use crate::config::CardzConfig;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved per-invocation environment: where everything lives.
pub struct CardzContext {
    pub data_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub config: CardzConfig,
}

/// Resolve the data directory, catalog path, and config.
///
/// Precedence for the data dir: the `--data` override, then the platform
/// data dir. Precedence for the catalog: the `--catalog` override, then
/// `catalog_path` from config.json, then `cards.json` in the data dir.
pub fn initialize(data_override: Option<&Path>, catalog_override: Option<&Path>) -> CardzContext {
    let data_dir = match data_override {
        Some(dir) => dir.to_path_buf(),
        None => ProjectDirs::from("com", "cardz", "cardz")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = CardzConfig::load(&data_dir).unwrap_or_default();

    let catalog_path = catalog_override
        .map(Path::to_path_buf)
        .or_else(|| config.catalog_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| data_dir.join(DEFAULT_CATALOG_FILENAME));

    CardzContext { data_dir, catalog_path, config }
}
