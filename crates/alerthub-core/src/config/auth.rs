//! Authentication, account, and challenge configuration.

use serde::{Deserialize, Serialize};

/// Authentication and account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Username of the bootstrap administrator account.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Password of the bootstrap administrator account. Override via
    /// `ALERTHUB_AUTH__ADMIN_PASSWORD` in any real deployment.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Email of the bootstrap administrator account.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Hours a pending sensitive update stays confirmable.
    #[serde(default = "default_pending_ttl")]
    pub pending_update_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            admin_email: default_admin_email(),
            password_min_length: default_password_min(),
            pending_update_ttl_hours: default_pending_ttl(),
        }
    }
}

/// Human-verification challenge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Smallest operand generated for the arithmetic challenge.
    #[serde(default = "default_operand_min")]
    pub operand_min: u8,
    /// Largest operand generated for the arithmetic challenge.
    #[serde(default = "default_operand_max")]
    pub operand_max: u8,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            operand_min: default_operand_min(),
            operand_max: default_operand_max(),
        }
    }
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

fn default_admin_email() -> String {
    "admin@alerthub.internal".to_string()
}

fn default_password_min() -> usize {
    6
}

fn default_pending_ttl() -> i64 {
    48
}

fn default_operand_min() -> u8 {
    1
}

fn default_operand_max() -> u8 {
    10
}
