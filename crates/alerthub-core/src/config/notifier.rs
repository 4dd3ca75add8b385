//! Outbound notification configuration.

use serde::{Deserialize, Serialize};

/// Configuration for outbound (simulated) email delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Public origin used when rendering verification/confirmation links.
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
        }
    }
}

fn default_public_url() -> String {
    "http://localhost:8080".to_string()
}
