//! `AuthUser` extractor — resolves the bearer session token into a caller context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use alerthub_core::error::AppError;
use alerthub_core::types::SessionId;
use alerthub_service::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // A malformed token can never name a live session.
        let token: SessionId = token
            .parse()
            .map_err(|_| AppError::session("Invalid or expired session token"))?;

        let (session, user) = state.sessions.resolve(token).await?;
        Ok(AuthUser(RequestContext::new(&session, &user)))
    }
}
