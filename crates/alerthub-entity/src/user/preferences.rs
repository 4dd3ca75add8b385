//! Per-user alert subscription preferences.

use serde::{Deserialize, Serialize};

use crate::event::{DisasterType, SeverityLevel};
use crate::zone::AlertZone;

/// Alert subscription settings attached to every user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Master switch for outbound notifications.
    pub notifications_enabled: bool,
    /// Delivery address. Empty until the user provides one.
    pub email: String,
    /// Whether the address has been verified. Alerts never fire for an
    /// unverified address; this is a delivery precondition, not a UI hint.
    pub email_verified: bool,
    /// Minimum severity for criteria-based alerts.
    pub min_severity: SeverityLevel,
    /// Hazard types the user subscribes to.
    pub subscribed_types: Vec<DisasterType>,
    /// Watch zones, evaluated in list order.
    pub watch_zones: Vec<AlertZone>,
}

impl UserPreferences {
    /// Whether alerts may be delivered at all: notifications on, address
    /// present, address verified.
    pub fn can_receive_alerts(&self) -> bool {
        self.notifications_enabled && !self.email.is_empty() && self.email_verified
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            email: String::new(),
            email_verified: false,
            min_severity: SeverityLevel::High,
            subscribed_types: vec![
                DisasterType::Flood,
                DisasterType::Typhoon,
                DisasterType::Earthquake,
                DisasterType::Tsunami,
            ],
            watch_zones: Vec::new(),
        }
    }
}
