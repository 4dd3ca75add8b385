//! Built-in seed events.
//!
//! Served alongside live data so the dashboard has content before the
//! first provider round-trip completes, and so a fully offline deployment
//! still exercises the whole alert pipeline.

use chrono::{Duration, Utc};

use alerthub_core::types::EventId;
use alerthub_entity::event::{DisasterEvent, DisasterType, SeverityLevel};
use alerthub_entity::geo::Coordinates;

/// The two standing seed events.
///
/// Ids are stable (`mock-1`, `mock-2`) so the sent-alert ledger
/// deduplicates them like any live event; timestamps are minted at call
/// time to keep them near the top of the feed.
pub fn seed_events() -> Vec<DisasterEvent> {
    let now = Utc::now();
    vec![
        DisasterEvent {
            id: EventId::from("mock-1"),
            title: "Tropical Depression 04W".to_string(),
            kind: DisasterType::Typhoon,
            severity: SeverityLevel::Moderate,
            location: Coordinates::new(13.5, 125.0),
            country: "Philippines".to_string(),
            description: "Developing tropical depression approaching Eastern Samar.".to_string(),
            affected_population: Some(50_000),
            timestamp: now,
            source: Some("Simulated News Stream".to_string()),
            is_prediction: None,
        },
        DisasterEvent {
            id: EventId::from("mock-2"),
            title: "Mount Merapi Activity".to_string(),
            kind: DisasterType::Volcano,
            severity: SeverityLevel::High,
            location: Coordinates::new(-7.5407, 110.4457),
            country: "Indonesia".to_string(),
            description: "Increased seismic activity and ash plumes detected.".to_string(),
            affected_population: Some(120_000),
            timestamp: now - Duration::days(1),
            source: Some("Global Volcanism Feed".to_string()),
            is_prediction: None,
        },
    ]
}
