//! Self-service preference and profile handlers.

use axum::Json;
use axum::extract::State;

use alerthub_core::error::AppError;
use alerthub_entity::user::UserPreferences;

use crate::dto::request::{UpdatePreferencesRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, ProfileUpdateResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::handlers::challenge;
use crate::state::AppState;

/// GET /api/users/me/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserPreferences>>, AppError> {
    let user = state.account.get_user(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(user.preferences)))
}

/// PUT /api/users/me/preferences
///
/// Non-sensitive path: zones, subscribed types, severity threshold, and
/// the notification toggle apply immediately, no challenge involved.
/// Email and password are not reachable from here.
pub async fn update_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state
        .account
        .update_preferences(auth.user_id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/users/me/profile
///
/// Sensitive path. A request touching email or password must carry a
/// solved challenge; the staged change then waits for the emailed
/// confirmation link. A request touching neither falls through as a
/// quiet no-op.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileUpdateResponse>>, AppError> {
    if req.is_sensitive() {
        let (Some(challenge_id), Some(answer)) = (req.challenge_id, req.challenge_answer) else {
            return Err(AppError::validation("Human verification not passed"));
        };
        challenge::pass_gate(&state, challenge_id, answer)?;

        if let Some(password) = req.new_password.as_deref().filter(|p| !p.is_empty()) {
            let confirmation = req.confirm_password.as_deref().unwrap_or_default();
            state.rules.validate_with_confirmation(password, confirmation)?;
        }
    }

    let outcome = state
        .account
        .update_profile(auth.user_id, req.into())
        .await?;

    Ok(Json(ApiResponse::ok(ProfileUpdateResponse {
        pending: outcome.pending,
        message: outcome.message,
        user: UserResponse::from(&outcome.user),
    })))
}
