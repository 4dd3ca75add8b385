//! Session lifecycle manager — open, resolve, close.

use std::sync::Arc;

use tracing::{info, warn};

use alerthub_core::AppResult;
use alerthub_core::error::AppError;
use alerthub_core::types::{SessionId, UserId};
use alerthub_entity::session::Session;
use alerthub_entity::user::User;
use alerthub_store::collections::{SessionsCollection, UsersCollection};

/// Manages opaque bearer-token sessions.
///
/// A session is established at register/login time and lives until logout
/// or account deletion; there is no expiry. Resolving a token loads the
/// owning user, so a deleted account invalidates its tokens immediately.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<SessionsCollection>,
    users: Arc<UsersCollection>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(sessions: Arc<SessionsCollection>, users: Arc<UsersCollection>) -> Self {
        Self { sessions, users }
    }

    /// Open a session for a user and return it.
    pub async fn open(&self, user_id: UserId) -> AppResult<Session> {
        let session = Session::new(user_id);
        self.sessions.insert(session.clone()).await?;
        info!(user_id = %user_id, session_id = %session.id, "Session opened");
        Ok(session)
    }

    /// Resolve a bearer token to its session and owning user.
    pub async fn resolve(&self, token: SessionId) -> AppResult<(Session, User)> {
        let Some(session) = self.sessions.find(token).await? else {
            return Err(AppError::session("Invalid or expired session token"));
        };

        match self.users.find_by_id(session.user_id).await? {
            Some(user) => Ok((session, user)),
            None => {
                // Account deleted out from under the session; drop the
                // orphaned token.
                warn!(session_id = %token, user_id = %session.user_id, "Session points at a missing user");
                self.sessions.remove(token).await?;
                Err(AppError::session("Invalid or expired session token"))
            }
        }
    }

    /// Close a session. Closing an unknown token is a quiet no-op.
    pub async fn close(&self, token: SessionId) -> AppResult<()> {
        if self.sessions.remove(token).await? {
            info!(session_id = %token, "Session closed");
        }
        Ok(())
    }

    /// Close every session a user holds.
    pub async fn close_for_user(&self, user_id: UserId) -> AppResult<()> {
        self.sessions.remove_for_user(user_id).await?;
        info!(user_id = %user_id, "All sessions closed for user");
        Ok(())
    }
}
