//! Hazard feed provider configuration.

use serde::{Deserialize, Serialize};

/// Feed aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// Whether the USGS earthquake provider is queried.
    #[serde(default = "default_true")]
    pub usgs_enabled: bool,
    /// Base URL of the USGS FDSN event service.
    #[serde(default = "default_usgs_base_url")]
    pub usgs_base_url: String,
    /// Minimum magnitude requested from USGS.
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    /// How many days back the USGS query reaches.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    /// Whether the EONET provider is queried.
    #[serde(default = "default_true")]
    pub eonet_enabled: bool,
    /// Base URL of the NASA EONET API.
    #[serde(default = "default_eonet_base_url")]
    pub eonet_base_url: String,
    /// Maximum number of open events requested from EONET.
    #[serde(default = "default_eonet_limit")]
    pub eonet_limit: u32,
    /// Whether the built-in seed events are included in results.
    #[serde(default = "default_true")]
    pub include_seed_events: bool,
    /// Seconds an aggregated result stays cached before re-fetching.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            usgs_enabled: true,
            usgs_base_url: default_usgs_base_url(),
            min_magnitude: default_min_magnitude(),
            lookback_days: default_lookback_days(),
            eonet_enabled: true,
            eonet_base_url: default_eonet_base_url(),
            eonet_limit: default_eonet_limit(),
            include_seed_events: true,
            cache_ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_usgs_base_url() -> String {
    "https://earthquake.usgs.gov".to_string()
}

fn default_min_magnitude() -> f64 {
    4.5
}

fn default_lookback_days() -> i64 {
    7
}

fn default_eonet_base_url() -> String {
    "https://eonet.gsfc.nasa.gov".to_string()
}

fn default_eonet_limit() -> u32 {
    20
}

fn default_cache_ttl() -> u64 {
    300
}
