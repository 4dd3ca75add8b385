//! Human-verification challenge handlers.

use axum::Json;
use axum::extract::{Path, State};

use alerthub_auth::challenge::{ChallengeOutcome, ChallengeView};
use alerthub_core::error::AppError;
use alerthub_core::types::ChallengeId;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/challenge
///
/// Mints a fresh unsolved challenge. The expected sum never leaves the
/// server; the client answers by echoing the id with its sum into the
/// gated request.
pub async fn issue(State(state): State<AppState>) -> Json<ApiResponse<ChallengeView>> {
    Json(ApiResponse::ok(state.challenges.issue()))
}

/// POST /api/challenge/{id}/refresh
///
/// Regenerates the operand pair and resets the challenge to unsolved.
/// Clients call this when the form context switches (login ⇄ register)
/// or on an explicit refresh click.
pub async fn refresh(
    State(state): State<AppState>,
    Path(id): Path<ChallengeId>,
) -> Result<Json<ApiResponse<ChallengeView>>, AppError> {
    Ok(Json(ApiResponse::ok(state.challenges.refresh(id)?)))
}

/// Enforce the human-verification gate for a protected operation.
///
/// A correct answer consumes the solved challenge, making it one-shot.
/// Anything else — wrong sum, unknown or already-consumed id — collapses
/// into one validation error, and a wrong sum has already regenerated
/// the operand pair server-side so the same sum cannot be brute-forced.
pub(crate) fn pass_gate(
    state: &AppState,
    challenge_id: ChallengeId,
    answer: u32,
) -> Result<(), AppError> {
    match state.challenges.submit(challenge_id, answer) {
        Ok(ChallengeOutcome::Verified) if state.challenges.consume_verified(challenge_id) => Ok(()),
        _ => Err(AppError::validation("Human verification not passed")),
    }
}
