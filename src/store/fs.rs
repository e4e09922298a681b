use super::OwnershipStore;
use crate::error::{CardzError, Result};
use crate::model::OwnershipDocument;
use std::fs;
use std::path::{Path, PathBuf};

const COLLECTIONS_DIR: &str = "collections";

/// Filesystem-backed document store: `<root>/collections/<user_id>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn doc_path(&self, user_id: &str) -> PathBuf {
        self.root
            .join(COLLECTIONS_DIR)
            .join(format!("{}.json", user_id))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CardzError::Io)?;
        }
        Ok(())
    }
}

impl OwnershipStore for FileStore {
    fn load(&self, user_id: &str) -> Result<Option<OwnershipDocument>> {
        let path = self.doc_path(user_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(CardzError::Io)?;
        let doc: OwnershipDocument =
            serde_json::from_str(&content).map_err(CardzError::Serialization)?;
        log::debug!("loaded document for {} from {}", user_id, path.display());
        Ok(Some(doc))
    }

    fn put(&mut self, user_id: &str, doc: &OwnershipDocument) -> Result<()> {
        self.ensure_dir(&self.root.join(COLLECTIONS_DIR))?;
        let path = self.doc_path(user_id);
        let content = serde_json::to_string_pretty(doc).map_err(CardzError::Serialization)?;
        fs::write(&path, content).map_err(CardzError::Io)?;
        log::debug!("wrote document for {} to {}", user_id, path.display());
        Ok(())
    }
}
