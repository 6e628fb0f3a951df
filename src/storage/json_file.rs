//! JSON document store
//!
//! Keeps the collection as a single pretty-printed JSON array on disk.
//! Saves go through a temporary sibling file that is renamed over the
//! target, so readers observe either the previous or the new document.

use super::ItemStore;
use crate::core::{Collection, StoreError};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the document, reporting why it could not.
    pub async fn read_collection(&self) -> Result<Collection, StoreError> {
        let bytes = tokio::fs::read(self.path.as_path())
            .await
            .map_err(|e| StoreError::io(self.path.as_path(), e))?;
        serde_json::from_slice(&bytes).map_err(StoreError::Malformed)
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    async fn load(&self) -> Collection {
        match self.read_collection().await {
            Ok(items) => items,
            Err(err) if err.is_missing() => {
                debug!(path = %self.path().display(), "item document absent, starting empty");
                Collection::new()
            }
            Err(err) => {
                warn!(
                    path = %self.path().display(),
                    error = %err,
                    "item document unreadable, serving empty collection"
                );
                Collection::new()
            }
        }
    }

    async fn save(&self, items: &Collection) -> Result<(), StoreError> {
        let serialized = serde_json::to_vec_pretty(items).map_err(StoreError::Serialize)?;
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || write_atomically(&path, &serialized)).await??;
        debug!(path = %self.path().display(), count = items.len(), "item document saved");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| StoreError::io(&parent, e))?;

    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| StoreError::io(&parent, e))?;
    temp.write_all(contents)
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.write_all(b"\n")
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
