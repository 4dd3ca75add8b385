//! Guest alert-config collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use alerthub_core::AppResult;
use alerthub_entity::guest::GuestAlertConfig;

use crate::document::{DocumentStore, keys};

/// Typed access to the pre-login alert configuration document.
#[derive(Debug)]
pub struct GuestConfigCollection {
    store: Arc<dyn DocumentStore>,
    write_guard: Mutex<()>,
}

impl GuestConfigCollection {
    /// Create the collection over a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// Load the guest config, falling back to defaults when never saved.
    pub async fn load(&self) -> AppResult<GuestAlertConfig> {
        match self.store.read(keys::GUEST_ALERT_CONFIG).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(GuestAlertConfig::default()),
        }
    }

    /// Replace the guest config in full.
    pub async fn save(&self, config: &GuestAlertConfig) -> AppResult<()> {
        let _guard = self.write_guard.lock().await;
        let raw = serde_json::to_string(config)?;
        self.store.write(keys::GUEST_ALERT_CONFIG, &raw).await
    }
}
