//! Pre-login alert configuration cache.

use serde::{Deserialize, Serialize};

use crate::event::{DisasterType, SeverityLevel};
use crate::zone::AlertZone;

/// Alert configuration held before a session exists.
///
/// Mirrors [`crate::user::UserPreferences`] except for the flag name:
/// the guest blob predates the account model and keeps its `enabled`
/// field. No delivery ever happens from it (no verified address).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestAlertConfig {
    /// Address the guest intends to register with.
    pub email: String,
    /// Master notification switch.
    pub enabled: bool,
    /// Minimum severity for criteria-based alerts.
    pub min_severity: SeverityLevel,
    /// Hazard types of interest.
    pub subscribed_types: Vec<DisasterType>,
    /// Watch zones drawn before login.
    pub watch_zones: Vec<AlertZone>,
}

impl Default for GuestAlertConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            enabled: true,
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
