//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use alerthub_core::types::UserId;

use super::pending::PendingUpdate;
use super::preferences::UserPreferences;
use super::role::UserRole;

/// A registered user record as persisted in the users document.
///
/// The password hash is part of the persisted shape; API responses go
/// through a response DTO that omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name (case-sensitive).
    pub username: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Role.
    pub role: UserRole,
    /// Alert subscription preferences.
    pub preferences: UserPreferences,
    /// In-flight sensitive change, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_update: Option<PendingUpdate>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user in the default (unverified) state.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            preferences: UserPreferences::default(),
            pending_update: None,
            created_at: Utc::now(),
        }
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether a sensitive change is awaiting confirmation.
    pub fn has_pending_update(&self) -> bool {
        self.pending_update.is_some()
    }
}
