//! Confirmation-link handler.

use axum::Json;
use axum::extract::{Query, State};

use alerthub_core::error::AppError;

use crate::dto::request::ConfirmQuery;
use crate::dto::response::{ApiResponse, ConfirmResponse};
use crate::state::AppState;

/// GET /api/confirm?verify_user=<id> | ?confirm_update=<token>
///
/// Resolves either kind of emailed link. Unmatched, stale, or
/// already-consumed tokens come back as `false` with a 200 — from the
/// link-follower's perspective a dead link is a no-op, never an error
/// page. Consuming a token clears the pending record, so a replayed
/// link naturally fails the match.
pub async fn confirm(
    State(state): State<AppState>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<ConfirmResponse>>, AppError> {
    let mut response = ConfirmResponse {
        verified_user: false,
        confirmed_update: false,
    };

    if let Some(user_id) = query.verify_user {
        response.verified_user = state.account.verify_user_email(user_id).await?;
    }
    if let Some(token) = query.confirm_update {
        response.confirmed_update = state.account.confirm_pending_update(token).await?;
    }

    Ok(Json(ApiResponse::ok(response)))
}
