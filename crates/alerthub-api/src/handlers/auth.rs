//! Auth handlers — register, login, logout, me, resend verification.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use alerthub_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse, SessionResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::handlers::challenge;
use crate::state::AppState;

/// POST /api/auth/register
///
/// The human-verification gate lives here, not in the directory: the
/// challenge must be solved before the account is created.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, AppError> {
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;
    state
        .rules
        .validate_with_confirmation(&req.password, &req.confirm_password)?;
    challenge::pass_gate(&state, req.challenge_id, req.challenge_answer)?;

    let (session, user) = state
        .account
        .register(&req.username, &req.password, &req.email)
        .await?;

    Ok(Json(ApiResponse::ok(SessionResponse {
        token: session.id,
        user: UserResponse::from(&user),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<SessionResponse>>, AppError> {
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let (session, user) = state.account.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(SessionResponse {
        token: session.id,
        user: UserResponse::from(&user),
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.account.logout(auth.context()).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.account.get_user(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// POST /api/auth/resend-verification
pub async fn resend_verification(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.account.resend_verification(auth.user_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Verification email sent".to_string(),
    })))
}
