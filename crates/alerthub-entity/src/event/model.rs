//! Disaster event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use alerthub_core::types::EventId;

use super::disaster_type::DisasterType;
use super::severity::SeverityLevel;
use crate::geo::Coordinates;

/// A single hazard event as reported by a feed provider.
///
/// Events are read-only to the alerting pipeline; providers mint the id
/// and all descriptive fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterEvent {
    /// Provider-assigned identifier.
    pub id: EventId,
    /// Short human-readable headline.
    pub title: String,
    /// Hazard category.
    #[serde(rename = "type")]
    pub kind: DisasterType,
    /// Severity classification.
    pub severity: SeverityLevel,
    /// Epicenter or representative location.
    pub location: Coordinates,
    /// Country name resolved from the location.
    pub country: String,
    /// Longer description.
    pub description: String,
    /// Estimated affected population, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_population: Option<u64>,
    /// When the event occurred or was last observed.
    pub timestamp: DateTime<Utc>,
    /// Name of the originating feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// True for model-predicted (not yet observed) events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prediction: Option<bool>,
}
