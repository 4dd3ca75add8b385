//! File-backed document store backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use alerthub_core::error::{AppError, ErrorKind};
use alerthub_core::result::AppResult;

use crate::document::DocumentStore;

/// Document store keeping one JSON file per document under a root
/// directory.
///
/// Writes go to a temp file first and are moved into place, so a crash
/// mid-write leaves the previous document intact rather than a truncated
/// one.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    /// Directory holding the document files.
    root: PathBuf,
}

impl FileDocumentStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Store,
                format!("Failed to create store root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn tmp_path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json.tmp"))
    }

    async fn read_file(path: &Path) -> AppResult<Option<String>> {
        match fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Store,
                format!("Failed to read document: {}", path.display()),
                e,
            )),
        }
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    fn backend_name(&self) -> &str {
        "file"
    }

    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Self::read_file(&self.path_for(key)).await
    }

    async fn write(&self, key: &str, contents: &str) -> AppResult<()> {
        let tmp = self.tmp_path_for(key);
        let path = self.path_for(key);

        fs::write(&tmp, contents).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Store,
                format!("Failed to write document: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Store,
                format!("Failed to commit document: {}", path.display()),
                e,
            )
        })?;

        debug!(key = %key, bytes = contents.len(), "Document written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Store,
                format!("Failed to remove document: {key}"),
                e,
            )),
        }
    }
}
