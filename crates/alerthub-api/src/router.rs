//! Route definitions for the AlertHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(challenge_routes())
        .merge(event_routes())
        .merge(guest_routes())
        .merge(confirm_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, logout, me, resend verification
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
        .route(
            "/auth/resend-verification",
            post(handlers::auth::resend_verification),
        )
}

/// Self-service preference and profile endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me/preferences", get(handlers::user::get_preferences))
        .route(
            "/users/me/preferences",
            put(handlers::user::update_preferences),
        )
        .route("/users/me/profile", put(handlers::user::update_profile))
}

/// Human-verification challenge endpoints
fn challenge_routes() -> Router<AppState> {
    Router::new()
        .route("/challenge", get(handlers::challenge::issue))
        .route(
            "/challenge/{id}/refresh",
            post(handlers::challenge::refresh),
        )
}

/// Event feed and analysis endpoints
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::events::list))
        .route("/events/{id}/analysis", get(handlers::events::analysis))
}

/// Guest alert-config endpoints (unauthenticated)
fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/alert-config", get(handlers::guest::get_config))
        .route("/alert-config", put(handlers::guest::put_config))
}

/// Confirmation-link endpoint (unauthenticated)
fn confirm_routes() -> Router<AppState> {
    Router::new().route("/confirm", get(handlers::confirm::confirm))
}

/// Admin endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::list_users))
        .route("/admin/users/{id}", delete(handlers::admin::delete_user))
        .route("/admin/scan", post(handlers::admin::scan))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
