//! # alerthub-api
//!
//! HTTP API layer for AlertHub built on Axum.
//!
//! Provides the REST endpoints, the bearer-session extractor, request
//! and response DTOs, and the mapping from [`alerthub_core::AppError`]
//! to HTTP responses. The server binary constructs an [`AppState`] and
//! hands it to [`router::build_router`].

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
