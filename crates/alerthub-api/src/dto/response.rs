//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use alerthub_core::types::{SessionId, UserId};
use alerthub_entity::user::{User, UserPreferences};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User record as exposed over the API. The password hash never leaves
/// the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Role string (`"ADMIN"` or `"USER"`).
    pub role: String,
    /// Alert subscription preferences.
    pub preferences: UserPreferences,
    /// Whether a sensitive change awaits confirmation.
    pub has_pending_update: bool,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.to_string(),
            preferences: user.preferences.clone(),
            has_pending_update: user.has_pending_update(),
            created_at: user.created_at,
        }
    }
}

/// Register/login response: the bearer token and its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Opaque bearer session token.
    pub token: SessionId,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Outcome of a profile update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    /// Whether the change was staged pending confirmation.
    pub pending: bool,
    /// Human-readable status line.
    pub message: String,
    /// The live record; staged values are not reflected in it.
    pub user: UserResponse,
}

/// Outcome of following a confirmation link.
///
/// Always reported with a 200; an unmatched id or token shows up as
/// `false` rather than an error, so a stale link is a quiet no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    /// Whether a registration activation was applied.
    pub verified_user: bool,
    /// Whether a pending sensitive update was applied.
    pub confirmed_update: bool,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
