//! Notification preference updates.

use tracing::info;

use alerthub_core::AppResult;
use alerthub_core::types::{UserId, ZoneId};
use alerthub_entity::event::{DisasterType, SeverityLevel};
use alerthub_entity::geo::Coordinates;
use alerthub_entity::user::User;
use alerthub_entity::zone::AlertZone;

use super::AccountService;

/// Partial preference update. Absent fields keep their stored value, so
/// clients only send what changed.
#[derive(Debug, Default, Clone)]
pub struct PreferencesUpdate {
    pub notifications_enabled: Option<bool>,
    pub min_severity: Option<SeverityLevel>,
    pub subscribed_types: Option<Vec<DisasterType>>,
    pub watch_zones: Option<Vec<WatchZoneInput>>,
}

/// One watch zone as submitted by a client.
///
/// A zone edited in place carries its existing id; a new zone omits it
/// and gets one minted on save.
#[derive(Debug, Clone)]
pub struct WatchZoneInput {
    pub id: Option<ZoneId>,
    pub name: String,
    pub coordinates: Vec<Coordinates>,
}

impl WatchZoneInput {
    fn into_zone(self) -> AlertZone {
        match self.id {
            Some(id) => AlertZone {
                id,
                name: self.name,
                coordinates: self.coordinates,
            },
            None => AlertZone::new(self.name, self.coordinates),
        }
    }
}

impl AccountService {
    /// Merge a partial preference update into the stored record.
    ///
    /// Email and password are deliberately not reachable from here; those
    /// go through [`AccountService::update_profile`] and its confirmation
    /// round-trip.
    pub async fn update_preferences(
        &self,
        user_id: UserId,
        update: PreferencesUpdate,
    ) -> AppResult<User> {
        let mut user = self.get_user(user_id).await?;

        if let Some(enabled) = update.notifications_enabled {
            user.preferences.notifications_enabled = enabled;
        }
        if let Some(min_severity) = update.min_severity {
            user.preferences.min_severity = min_severity;
        }
        if let Some(types) = update.subscribed_types {
            user.preferences.subscribed_types = types;
        }
        if let Some(zones) = update.watch_zones {
            user.preferences.watch_zones =
                zones.into_iter().map(WatchZoneInput::into_zone).collect();
        }

        self.users.save(user.clone()).await?;
        info!(user_id = %user.id, "Preferences updated");
        Ok(user)
    }
}
