//! Sessions collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use alerthub_core::AppResult;
use alerthub_core::types::{SessionId, UserId};
use alerthub_entity::session::Session;

use crate::document::{DocumentStore, keys};

/// Typed access to the sessions document.
#[derive(Debug)]
pub struct SessionsCollection {
    store: Arc<dyn DocumentStore>,
    write_guard: Mutex<()>,
}

impl SessionsCollection {
    /// Create the collection over a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    async fn load(&self) -> AppResult<Vec<Session>> {
        match self.store.read(keys::SESSIONS).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, sessions: &[Session]) -> AppResult<()> {
        let raw = serde_json::to_string(sessions)?;
        self.store.write(keys::SESSIONS, &raw).await
    }

    /// Look up a session by token.
    pub async fn find(&self, id: SessionId) -> AppResult<Option<Session>> {
        Ok(self.load().await?.into_iter().find(|s| s.id == id))
    }

    /// Record a freshly opened session.
    pub async fn insert(&self, session: Session) -> AppResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut sessions = self.load().await?;
        sessions.push(session);
        self.persist(&sessions).await
    }

    /// Drop a session by token. Returns whether one existed.
    pub async fn remove(&self, id: SessionId) -> AppResult<bool> {
        let _guard = self.write_guard.lock().await;
        let mut sessions = self.load().await?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.persist(&sessions).await?;
        Ok(true)
    }

    /// Drop every session belonging to a user (used when the account is
    /// deleted).
    pub async fn remove_for_user(&self, user_id: UserId) -> AppResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut sessions = self.load().await?;
        sessions.retain(|s| s.user_id != user_id);
        self.persist(&sessions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::MemoryDocumentStore;

    #[tokio::test]
    async fn test_insert_find_remove() {
        let sessions = SessionsCollection::new(Arc::new(MemoryDocumentStore::new()));
        let session = Session::new(UserId::new());
        let id = session.id;

        sessions.insert(session).await.unwrap();
        assert!(sessions.find(id).await.unwrap().is_some());

        assert!(sessions.remove(id).await.unwrap());
        assert!(!sessions.remove(id).await.unwrap());
        assert!(sessions.find(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_for_user_clears_all_their_sessions() {
        let sessions = SessionsCollection::new(Arc::new(MemoryDocumentStore::new()));
        let user = UserId::new();
        let other = UserId::new();
        sessions.insert(Session::new(user)).await.unwrap();
        sessions.insert(Session::new(user)).await.unwrap();
        let kept = Session::new(other);
        let kept_id = kept.id;
        sessions.insert(kept).await.unwrap();

        sessions.remove_for_user(user).await.unwrap();
        assert!(sessions.find(kept_id).await.unwrap().is_some());
    }
}
