//! Local-disk object store for uploaded assets (logos, hero backgrounds).
//! Files are keyed by a generated id; the id is what gets persisted on the
//! owning document, never a raw path.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize, TS)]
pub struct StoredFile {
    pub id: String,
    pub original_name: String,
}

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn store(&self, filename: &str, bytes: &[u8]) -> Result<StoredFile, StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let id = match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        tokio::fs::write(self.root.join(&id), bytes).await?;
        Ok(StoredFile {
            id,
            original_name: filename.to_string(),
        })
    }

    /// Resolve an id back to a path. Ids containing separators are rejected
    /// so a stored id can never escape the storage root.
    pub fn path_for(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
            return None;
        }
        Some(self.root.join(id))
    }

    pub async fn read(&self, id: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let Some(path) = self.path_for(id) else {
            return Ok(None);
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_rejects_traversal() {
        let storage = FileStorage::new("/tmp/suncore-test");
        assert!(storage.path_for("../etc/passwd").is_none());
        assert!(storage.path_for("a/b.png").is_none());
        assert!(storage.path_for("").is_none());
        assert!(storage.path_for("logo.png").is_some());
    }
}
