//! # alerthub-store
//!
//! Persistence for AlertHub. State lives in a handful of named documents,
//! each read and written as one JSON string blob — there are no partial
//! updates and no cross-document transactions. [`DocumentStore`] is the
//! backend seam (file-per-document or in-memory); the `collections`
//! module layers typed access and single-writer serialization on top.

pub mod backends;
pub mod collections;
pub mod document;

pub use document::{DocumentStore, keys};

use std::sync::Arc;

use alerthub_core::config::store::StoreConfig;
use alerthub_core::{AppError, AppResult};

use backends::file::FileDocumentStore;
use backends::memory::MemoryDocumentStore;

/// Open the document store selected by configuration.
pub async fn open(config: &StoreConfig) -> AppResult<Arc<dyn DocumentStore>> {
    match config.backend.as_str() {
        "file" => Ok(Arc::new(FileDocumentStore::new(&config.data_dir).await?)),
        "memory" => Ok(Arc::new(MemoryDocumentStore::new())),
        other => Err(AppError::configuration(format!(
            "Unknown store backend: '{other}'. Expected 'file' or 'memory'"
        ))),
    }
}
