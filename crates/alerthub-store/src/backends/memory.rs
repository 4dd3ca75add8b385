//! In-memory document store backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use alerthub_core::result::AppResult;

use crate::document::DocumentStore;

/// Volatile document store backed by a process-local map.
///
/// Used by tests and local experiments; contents vanish on restart.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend_name(&self) -> &str {
        "memory"
    }

    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, contents: &str) -> AppResult<()> {
        self.documents
            .write()
            .await
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.documents.write().await.remove(key);
        Ok(())
    }
}
