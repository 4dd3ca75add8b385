//! Per-request caller identity.

use alerthub_core::types::{SessionId, UserId};
use alerthub_entity::session::Session;
use alerthub_entity::user::{User, UserRole};

/// Who is making the current request.
///
/// Built by the authentication extractor from a resolved session and
/// passed explicitly into every operation that needs the caller, so
/// services never reach for ambient session state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: UserId,
    pub session_id: SessionId,
    pub username: String,
    pub role: UserRole,
}

impl RequestContext {
    /// Builds a context from a resolved session and its owning user.
    pub fn new(session: &Session, user: &User) -> Self {
        Self {
            user_id: user.id,
            session_id: session.id,
            username: user.username.clone(),
            role: user.role,
        }
    }

    /// Whether the caller holds the administrator role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
