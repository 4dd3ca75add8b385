//! USGS earthquake feed provider.
//!
//! Queries the FDSN event service for recent earthquakes in the covered
//! region and normalizes the GeoJSON features into [`DisasterEvent`]s.

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
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

// Bounding box covering Southeast Asia, the region the dashboard serves.
const MIN_LAT: f64 = -11.0;
const MAX_LAT: f64 = 28.0;
const MIN_LNG: f64 = 92.0;
const MAX_LNG: f64 = 142.0;

/// Fetches recent earthquakes from the USGS FDSN event service.
pub struct UsgsProvider {
    client: reqwest::Client,
    config: FeedsConfig,
}

impl UsgsProvider {
    /// Creates a provider with the given feed configuration.
    pub fn new(client: reqwest::Client, config: FeedsConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl FeedProvider for UsgsProvider {
    fn name(&self) -> &str {
        "usgs"
    }

    async fn fetch(&self) -> AppResult<Vec<DisasterEvent>> {
        let end = Utc::now();
        let start = end - Duration::days(self.config.lookback_days);
        let url = format!("{}/fdsnws/event/1/query", self.config.usgs_base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "geojson".to_string()),
                ("starttime", start.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ("endtime", end.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ("minmagnitude", self.config.min_magnitude.to_string()),
                ("minlatitude", MIN_LAT.to_string()),
                ("maxlatitude", MAX_LAT.to_string()),
                ("minlongitude", MIN_LNG.to_string()),
                ("maxlongitude", MAX_LNG.to_string()),
            ])
            .send()
            .await
            .map_err(|err| {
                AppError::with_source(ErrorKind::ExternalService, "USGS request failed", err)
            })?
            .error_for_status()
            .map_err(|err| {
                AppError::with_source(ErrorKind::ExternalService, "USGS returned an error status", err)
            })?;

        let body: UsgsResponse = response.json().await.map_err(|err| {
            AppError::with_source(ErrorKind::ExternalService, "USGS response was not valid GeoJSON", err)
        })?;

        debug!(features = body.features.len(), "USGS feed fetched");
        Ok(body.features.into_iter().map(map_feature).collect())
    }
}

/// Buckets an earthquake magnitude into a severity level.
fn magnitude_severity(magnitude: f64) -> SeverityLevel {
    if magnitude >= 7.0 {
        SeverityLevel::Critical
    } else if magnitude >= 6.0 {
        SeverityLevel::High
    } else if magnitude >= 5.0 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Low
    }
}

fn map_feature(feature: UsgsFeature) -> DisasterEvent {
    // GeoJSON order is [lng, lat, depth].
    let [lng, lat, depth] = feature.geometry.coordinates;
    DisasterEvent {
        id: EventId::from(feature.id),
        title: format!(
            "M {} Earthquake - {}",
            feature.properties.mag, feature.properties.place
        ),
        kind: DisasterType::Earthquake,
        severity: magnitude_severity(feature.properties.mag),
        location: Coordinates::new(lat, lng),
        country: resolve_country(lat, lng),
        description: format!("Depth: {depth}km. Status: {}.", feature.properties.status),
        affected_population: Some(0),
        timestamp: DateTime::from_timestamp_millis(feature.properties.time).unwrap_or_default(),
        source: Some("USGS".to_string()),
        is_prediction: None,
    }
}

#[derive(Debug, Deserialize)]
struct UsgsResponse {
    #[serde(default)]
    features: Vec<UsgsFeature>,
}

#[derive(Debug, Deserialize)]
struct UsgsFeature {
    id: String,
    properties: UsgsProperties,
    geometry: UsgsGeometry,
}

#[derive(Debug, Deserialize)]
struct UsgsProperties {
    mag: f64,
    place: String,
    time: i64,
    status: String,
}

#[derive(Debug, Deserialize)]
struct UsgsGeometry {
    coordinates: [f64; 3],
}
