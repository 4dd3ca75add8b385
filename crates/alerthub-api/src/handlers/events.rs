//! Event feed and risk analysis handlers.

use axum::Json;
use axum::extract::{Path, State};

use alerthub_core::error::AppError;
use alerthub_core::types::EventId;
use alerthub_entity::analysis::RiskAssessment;
use alerthub_entity::event::DisasterEvent;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/events
///
/// The aggregated feed, newest first. Served from the aggregator's cache
/// between scheduler ticks.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<DisasterEvent>>> {
    let events = state.aggregator.events().await;
    Json(ApiResponse::ok(events.as_ref().clone()))
}

/// GET /api/events/{id}/analysis
///
/// Runs the risk analyzer for one event from the current feed. The
/// analyzer itself never fails; a missing event does.
pub async fn analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RiskAssessment>>, AppError> {
    let id = EventId::new(id);
    let event = state
        .aggregator
        .find(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Event not found: {id}")))?;

    Ok(Json(ApiResponse::ok(state.analyzer.analyze(&event).await)))
}
