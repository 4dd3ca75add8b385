//! Guest alert-config handlers.
//!
//! The pre-login configuration cache: a browser without a session can
//! stash the alert settings it is building, then carry them into
//! registration. Unauthenticated by design.

use axum::Json;
use axum::extract::State;

use alerthub_core::error::AppError;
use alerthub_entity::guest::GuestAlertConfig;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/alert-config
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<GuestAlertConfig>>, AppError> {
    Ok(Json(ApiResponse::ok(state.guest_config.load().await?)))
}

/// PUT /api/alert-config
pub async fn put_config(
    State(state): State<AppState>,
    Json(config): Json<GuestAlertConfig>,
) -> Result<Json<ApiResponse<GuestAlertConfig>>, AppError> {
    state.guest_config.save(&config).await?;
    Ok(Json(ApiResponse::ok(config)))
}
