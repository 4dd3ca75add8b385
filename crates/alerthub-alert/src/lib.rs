//! # alerthub-alert
//!
//! The alerting pipeline: deciding which disaster events a user should
//! hear about, and getting the emails out exactly once per event.
//!
//! ## Modules
//!
//! - `geofence` — Point-in-polygon tests for watch zones
//! - `matcher` — Per-event alert decisions against user preferences
//! - `notifier` — The `EmailSender` seam and message rendering
//! - `dispatcher` — Ledger-deduplicated delivery runs

pub mod dispatcher;
pub mod geofence;
pub mod matcher;
pub mod notifier;

pub use dispatcher::AlertDispatcher;
pub use matcher::AlertDecision;
pub use notifier::{EmailMessage, EmailSender};
