//! Document store trait and well-known document keys.

use async_trait::async_trait;

use alerthub_core::result::AppResult;

/// Well-known document keys.
pub mod keys {
    /// All user records, password hashes and pending updates included.
    pub const USERS: &str = "users";
    /// Active sessions (token to user mapping).
    pub const SESSIONS: &str = "sessions";
    /// Sent-alert ledger entries.
    pub const SENT_ALERTS: &str = "sent_alerts";
    /// Pre-login alert configuration cache.
    pub const GUEST_ALERT_CONFIG: &str = "guest_alert_config";
}

/// A durable key to string-blob mapping.
///
/// Documents are opaque to the store; callers serialize whole documents
/// and overwrite them in full. Writes are at-least-once durable once the
/// call returns. The store itself does not serialize concurrent writers
/// to the same key — collections do that above this seam.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "file", "memory").
    fn backend_name(&self) -> &str;

    /// Read a document, or `None` if the key has never been written.
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Write (create or fully replace) a document.
    async fn write(&self, key: &str, contents: &str) -> AppResult<()>;

    /// Remove a document. Removing a missing key is a no-op.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
