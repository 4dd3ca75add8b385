//! Users collection.

use std::sync::Arc;

use tokio::sync::Mutex;

use alerthub_core::types::{UserId, VerificationToken};
use alerthub_core::{AppError, AppResult};
use alerthub_entity::user::User;

use crate::document::{DocumentStore, keys};

/// Typed access to the users document.
#[derive(Debug)]
pub struct UsersCollection {
    store: Arc<dyn DocumentStore>,
    write_guard: Mutex<()>,
}

impl UsersCollection {
    /// Create the collection over a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_guard: Mutex::new(()),
        }
    }

    /// Load every user record. A never-written document is an empty list.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        match self.store.read(keys::USERS).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, users: &[User]) -> AppResult<()> {
        let raw = serde_json::to_string(users)?;
        self.store.write(keys::USERS, &raw).await
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.list().await?.into_iter().find(|u| u.id == id))
    }

    /// Find a user by exact (case-sensitive) username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|u| u.username == username))
    }

    /// Find the user whose pending update carries the given token.
    ///
    /// Tokens are globally unique by construction, so at most one user
    /// can match.
    pub async fn find_by_pending_token(
        &self,
        token: VerificationToken,
    ) -> AppResult<Option<User>> {
        Ok(self.list().await?.into_iter().find(|u| {
            u.pending_update
                .as_ref()
                .is_some_and(|p| p.verification_token == token)
        }))
    }

    /// Insert a new user. Fails with a conflict if the username is taken.
    pub async fn insert(&self, user: User) -> AppResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut users = self.list().await?;
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }
        users.push(user);
        self.persist(&users).await
    }

    /// Replace an existing user record (matched by id) in full.
    pub async fn save(&self, user: User) -> AppResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut users = self.list().await?;
        let Some(slot) = users.iter_mut().find(|u| u.id == user.id) else {
            return Err(AppError::not_found(format!("User not found: {}", user.id)));
        };
        *slot = user;
        self.persist(&users).await
    }

    /// Delete a user by id. Returns whether a record was removed.
    pub async fn delete(&self, id: UserId) -> AppResult<bool> {
        let _guard = self.write_guard.lock().await;
        let mut users = self.list().await?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.persist(&users).await?;
        Ok(true)
    }
}
