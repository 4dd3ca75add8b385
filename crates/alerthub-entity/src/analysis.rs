//! Risk assessment produced by the analysis provider.

use serde::{Deserialize, Serialize};

/// AI-generated risk assessment for a single event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk score from 0 (none) to 100, weighted by regional vulnerability.
    pub risk_score: u8,
    /// Concise situation report.
    pub summary: String,
    /// Forecast of consequences over the next 24-48 hours.
    pub predicted_impact: String,
    /// Top recommended actions for local authorities.
    pub recommended_actions: Vec<String>,
}
