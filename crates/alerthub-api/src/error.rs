//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl lives next to `AppError` in
//! `alerthub_core::error` (coherence requires the impl in the crate that
//! defines the type); this module re-exports the response body.

pub use alerthub_core::error::ApiErrorResponse;
