//! Local filesystem snapshot storage.
//!
//! One JSON file per feed key plus a one-line language file, all under the
//! configured cache directory. Writes are atomic (temp file + rename) so a
//! concurrent reader never sees a half-written snapshot.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Language;
use crate::storage::{ContentKey, Snapshot, SnapshotStore};

/// Filesystem storage backend.
#[derive(Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    fn snapshot_key(key: ContentKey) -> String {
        format!("{}.json", key.as_str())
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data. A malformed file surfaces as a decode error; callers
    /// treat that as a cache miss.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SnapshotStore for LocalStore {
    async fn read_snapshot(&self, key: ContentKey) -> Result<Option<Snapshot>> {
        self.read_json(&Self::snapshot_key(key)).await
    }

    async fn write_snapshot(&self, key: ContentKey, snapshot: &Snapshot) -> Result<()> {
        self.write_json(&Self::snapshot_key(key), snapshot).await
    }

    async fn read_language(&self) -> Result<Option<Language>> {
        match self.read_bytes("language").await? {
            Some(bytes) => {
                let code = String::from_utf8_lossy(&bytes);
                Ok(Some(Language::from_code(&code)))
            }
            None => Ok(None),
        }
    }

    async fn write_language(&self, language: Language) -> Result<()> {
        self.write_bytes("language", language.as_code().as_bytes())
            .await
    }
}
