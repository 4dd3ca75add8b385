//! # alerthub-feed
//!
//! Where disaster events come from: live providers (USGS earthquakes,
//! NASA EONET), the built-in seed events, and the aggregator that merges
//! them into one cached, time-ordered list. Also hosts the risk analyzer
//! that asks an external model about a single event.
//!
//! Provider failures never escape this crate; a broken feed degrades to
//! an empty contribution and the analyzer to a placeholder assessment.

pub mod aggregator;
pub mod analysis;
pub mod country;
pub mod providers;
pub mod seeds;

pub use aggregator::EventAggregator;
pub use analysis::{HttpRiskAnalyzer, RiskAnalyzer};
pub use providers::FeedProvider;
