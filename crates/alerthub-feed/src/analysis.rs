//! AI risk analysis provider.
//!
//! Sends a single event to an external JSON analysis endpoint and maps
//! the response into a [`RiskAssessment`]. The analyzer never fails:
//! a missing API key or a provider error produces a placeholder
//! assessment instead, so event detail pages always render.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use alerthub_core::AppResult;
use alerthub_core::config::AnalysisConfig;
use alerthub_core::error::{AppError, ErrorKind};
use alerthub_entity::analysis::RiskAssessment;
use alerthub_entity::event::DisasterEvent;

/// Produces a risk assessment for one event.
#[async_trait]
pub trait RiskAnalyzer: Send + Sync {
    /// Analyze an event. Infallible; degraded modes return placeholders.
    async fn analyze(&self, event: &DisasterEvent) -> RiskAssessment;
}

/// Risk analyzer backed by an external HTTP endpoint.
pub struct HttpRiskAnalyzer {
    client: reqwest::Client,
    config: AnalysisConfig,
}

impl HttpRiskAnalyzer {
    /// Creates an analyzer with the given provider configuration.
    pub fn new(client: reqwest::Client, config: AnalysisConfig) -> Self {
        Self { client, config }
    }

    async fn request_assessment(&self, event: &DisasterEvent) -> AppResult<RiskAssessment> {
        let request = AnalysisRequest {
            title: &event.title,
            kind: event.kind.to_string(),
            country: &event.country,
            severity: event.severity.to_string(),
            lat: event.location.lat,
            lng: event.location.lng,
            description: &event.description,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                AppError::with_source(ErrorKind::ExternalService, "Analysis request failed", err)
            })?
            .error_for_status()
            .map_err(|err| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Analysis endpoint returned an error status",
                    err,
                )
            })?;

        let body: AnalysisResponse = response.json().await.map_err(|err| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Analysis response was not valid JSON",
                err,
            )
        })?;

        Ok(RiskAssessment {
            risk_score: body.risk_score,
            summary: body.summary,
            predicted_impact: body.predicted_impact,
            recommended_actions: body.recommended_actions,
        })
    }
}

#[async_trait]
impl RiskAnalyzer for HttpRiskAnalyzer {
    async fn analyze(&self, event: &DisasterEvent) -> RiskAssessment {
        if self.config.api_key.is_empty() {
            return missing_key_assessment();
        }

        match self.request_assessment(event).await {
            Ok(assessment) => assessment,
            Err(error) => {
                warn!(
                    event_id = %event.id,
                    %error,
                    "Risk analysis failed, returning placeholder"
                );
                unavailable_assessment()
            }
        }
    }
}

fn missing_key_assessment() -> RiskAssessment {
    RiskAssessment {
        risk_score: 0,
        summary: "API Key missing. Unable to generate analysis.".to_string(),
        predicted_impact: "N/A".to_string(),
        recommended_actions: Vec::new(),
    }
}

fn unavailable_assessment() -> RiskAssessment {
    RiskAssessment {
        risk_score: 50,
        summary: "Automated analysis temporarily unavailable.".to_string(),
        predicted_impact: "Unable to calculate spread prediction.".to_string(),
        recommended_actions: vec![
            "Monitor local news".to_string(),
            "Follow official evacuation orders".to_string(),
        ],
    }
}

#[derive(Debug, Serialize)]
struct AnalysisRequest<'a> {
    title: &'a str,
    #[serde(rename = "type")]
    kind: String,
    country: &'a str,
    severity: String,
    lat: f64,
    lng: f64,
    description: &'a str,
}

/// Wire shape the analysis endpoint replies with.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResponse {
    risk_score: u8,
    summary: String,
    predicted_impact: String,
    #[serde(default)]
    recommended_actions: Vec<String>,
}
