//! NASA EONET feed provider.
//!
//! Pulls currently-open natural events from the Earth Observatory Natural
//! Event Tracker, keeps the categories the dashboard cares about, and
//! filters to the covered region.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use alerthub_core::AppResult;
use alerthub_core::config::FeedsConfig;
use alerthub_core::error::{AppError, ErrorKind};
use alerthub_core::types::EventId;
use alerthub_entity::event::{DisasterEvent, DisasterType, SeverityLevel};
use alerthub_entity::geo::Coordinates;

use crate::country::resolve_country;

use super::FeedProvider;

const MIN_LAT: f64 = -11.0;
const MAX_LAT: f64 = 28.0;
const MIN_LNG: f64 = 92.0;
const MAX_LNG: f64 = 142.0;

/// Fetches open events from the NASA EONET API.
pub struct EonetProvider {
    client: reqwest::Client,
    config: FeedsConfig,
}

impl EonetProvider {
    /// Creates a provider with the given feed configuration.
    pub fn new(client: reqwest::Client, config: FeedsConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl FeedProvider for EonetProvider {
    fn name(&self) -> &str {
        "eonet"
    }

    async fn fetch(&self) -> AppResult<Vec<DisasterEvent>> {
        let url = format!("{}/api/v3/events", self.config.eonet_base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("status", "open".to_string()),
                ("limit", self.config.eonet_limit.to_string()),
            ])
            .send()
            .await
            .map_err(|err| {
                AppError::with_source(ErrorKind::ExternalService, "EONET request failed", err)
            })?
            .error_for_status()
            .map_err(|err| {
                AppError::with_source(ErrorKind::ExternalService, "EONET returned an error status", err)
            })?;

        let body: EonetResponse = response.json().await.map_err(|err| {
            AppError::with_source(ErrorKind::ExternalService, "EONET response was not valid JSON", err)
        })?;

        let events: Vec<DisasterEvent> =
            body.events.into_iter().filter_map(map_event).collect();
        debug!(events = events.len(), "EONET feed fetched");
        Ok(events)
    }
}

/// Maps an EONET category id onto an internal hazard type.
///
/// Categories outside this table (droughts, sea ice, and anything EONET
/// adds later) are skipped entirely.
fn map_category(id: &str) -> Option<DisasterType> {
    match id {
        "8" => Some(DisasterType::Wildfire),
        "10" => Some(DisasterType::SevereStorm),
        "12" => Some(DisasterType::Volcano),
        "15" => Some(DisasterType::Flood),
        _ => None,
    }
}

fn map_event(event: EonetEvent) -> Option<DisasterEvent> {
    let kind = map_category(&event.categories.first()?.id)?;

    // The last geometry entry is the most recent observation.
    let geometry = event.geometry.last()?;
    let (lat, lng) = geometry.point()?;

    if !(MIN_LAT..=MAX_LAT).contains(&lat) || !(MIN_LNG..=MAX_LNG).contains(&lng) {
        return None;
    }

    let description = event
        .description
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| format!("Active {kind} detected by NASA satellites."));

    Some(DisasterEvent {
        id: EventId::from(event.id),
        title: event.title,
        kind,
        severity: SeverityLevel::Moderate,
        location: Coordinates::new(lat, lng),
        country: resolve_country(lat, lng),
        description,
        affected_population: Some(0),
        timestamp: geometry.date,
        source: Some("NASA EONET".to_string()),
        is_prediction: None,
    })
}

#[derive(Debug, Deserialize)]
struct EonetResponse {
    #[serde(default)]
    events: Vec<EonetEvent>,
}

#[derive(Debug, Deserialize)]
struct EonetEvent {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    categories: Vec<EonetCategory>,
    #[serde(default)]
    geometry: Vec<EonetGeometry>,
}

#[derive(Debug, Deserialize)]
struct EonetCategory {
    id: String,
}

#[derive(Debug, Deserialize)]
struct EonetGeometry {
    date: DateTime<Utc>,
    coordinates: serde_json::Value,
}

impl EonetGeometry {
    /// Extract `(lat, lng)` from a point geometry, which EONET encodes
    /// as `[lng, lat]`. Polygon geometries are skipped.
    fn point(&self) -> Option<(f64, f64)> {
        let pair = self.coordinates.as_array()?;
        let lng = pair.first()?.as_f64()?;
        let lat = pair.get(1)?.as_f64()?;
        Some((lat, lng))
    }
}
