//! Admin handlers — user directory and manual alert scans.

use axum::Json;
use axum::extract::{Path, State};

use alerthub_core::error::AppError;
use alerthub_core::types::UserId;
use alerthub_service::alerts::ScanSummary;

use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    require_admin(&auth)?;

    let users = state.account.list_users().await?;
    let users = users.iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::ok(users)))
}

/// DELETE /api/admin/users/{id}
///
/// Self-deletion and deleting another administrator are rejected by the
/// directory.
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    require_admin(&auth)?;

    state.account.delete_user(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}

/// POST /api/admin/scan
///
/// Runs one alert sweep right now, outside the scheduler cadence, and
/// reports what fired.
pub async fn scan(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ScanSummary>>, AppError> {
    require_admin(&auth)?;

    Ok(Json(ApiResponse::ok(state.alerts.scan_all().await?)))
}
