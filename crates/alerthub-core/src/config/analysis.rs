//! Risk analysis provider configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the external risk-analysis endpoint.
///
/// An empty `api_key` switches the analyzer into its degraded mode, which
/// returns placeholder assessments instead of calling out.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisConfig {
    /// URL of the JSON analysis endpoint.
    #[serde(default)]
    pub endpoint: String,
    /// API key sent as a bearer token. Empty disables the provider.
    #[serde(default)]
    pub api_key: String,
}
