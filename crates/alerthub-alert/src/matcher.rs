//! Per-event alert decisions.

use alerthub_entity::event::DisasterEvent;
use alerthub_entity::user::UserPreferences;

use crate::geofence;

/// The outcome of matching one event against one user's preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDecision {
    /// Whether an alert should go out for this event.
    pub fire: bool,
    /// Name of the first watch zone containing the event, if any.
    ///
    /// Set whenever a zone matched, even when the severity/type criteria
    /// fired on their own, so the alert message can cite the zone.
    pub matched_zone: Option<String>,
}

/// Decides whether `event` warrants an alert under `preferences`.
///
/// Two independent paths fire an alert:
/// - the event's severity is at least the user's minimum AND its type is
///   one the user subscribed to;
/// - the event lies inside any of the user's watch zones, which overrides
///   both filters.
///
/// Delivery eligibility (notifications enabled, verified email) is the
/// caller's concern; this only looks at the filters.
pub fn evaluate(event: &DisasterEvent, preferences: &UserPreferences) -> AlertDecision {
    let matched_zone = geofence::match_zone(event.location, &preferences.watch_zones)
        .map(|zone| zone.name.clone());

    let severity_match = event.severity >= preferences.min_severity;
    let type_match = preferences.subscribed_types.contains(&event.kind);

    AlertDecision {
        fire: (severity_match && type_match) || matched_zone.is_some(),
        matched_zone,
    }
}
