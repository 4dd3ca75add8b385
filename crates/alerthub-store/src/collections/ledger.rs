//! Sent-alert ledger collection.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use alerthub_core::AppResult;
use alerthub_core::types::{EventId, UserId};
use alerthub_entity::alert::SentAlert;

use crate::document::{DocumentStore, keys};

/// Typed access to the sent-alert ledger.
///
/// Entries are (user, event) pairs; the ledger grows without bound and is
/// never compacted.
#[derive(Debug)]
pub struct LedgerCollection {
    store: Arc<dyn DocumentStore>,
    write_guard: Mutex<()>,
}

impl LedgerCollection {
    /// Create the collection over a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    async fn load(&self) -> AppResult<Vec<SentAlert>> {
        match self.store.read(keys::SENT_ALERTS).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, entries: &[SentAlert]) -> AppResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.write(keys::SENT_ALERTS, &raw).await
    }

    /// Event ids already alerted to the given user.
    pub async fn sent_event_ids(&self, user_id: UserId) -> AppResult<HashSet<EventId>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.event_id)
            .collect())
    }

    /// Append a batch of entries with a single persist.
    ///
    /// The dispatcher accumulates everything fired in one pass and flushes
    /// here once; an empty batch writes nothing.
    pub async fn append(&self, batch: Vec<SentAlert>) -> AppResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let _guard = self.write_guard.lock().await;
        let mut entries = self.load().await?;
        entries.extend(batch);
        self.persist(&entries).await
    }
}
