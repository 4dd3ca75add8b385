//! In-flight sensitive profile change.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use alerthub_core::types::VerificationToken;

/// A staged email and/or password change awaiting confirmation.
///
/// At most one exists per user; a newer sensitive edit replaces the
/// record wholesale, retiring the earlier token. Confirming applies the
/// staged values to the live user and clears the record, which is what
/// makes the token single-use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingUpdate {
    /// Staged replacement email, if the email is changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_email: Option<String>,
    /// Staged replacement password hash, if the password is changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password_hash: Option<String>,
    /// Single-use confirmation token carried in the emailed link.
    pub verification_token: VerificationToken,
    /// When the change was requested; confirmation is rejected once this
    /// is older than the configured TTL.
    pub requested_at: DateTime<Utc>,
}

impl PendingUpdate {
    /// Start a fresh pending record with a new token.
    pub fn new() -> Self {
        Self {
            new_email: None,
            new_password_hash: None,
            verification_token: VerificationToken::new(),
            requested_at: Utc::now(),
        }
    }

    /// Whether the record has outlived the confirmation window.
    pub fn is_stale(&self, ttl_hours: i64) -> bool {
        Utc::now() - self.requested_at > Duration::hours(ttl_hours)
    }
}

impl Default for PendingUpdate {
    fn default() -> Self {
        Self::new()
    }
}
