//! User session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use alerthub_core::types::{SessionId, UserId};

/// An active login session.
///
/// The session id doubles as the opaque bearer token handed to the
/// client; possession of it is possession of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier / bearer token.
    pub id: SessionId,
    /// The user this session belongs to.
    pub user_id: UserId,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Open a fresh session for a user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: SessionId::new(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
