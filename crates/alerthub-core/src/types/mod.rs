//! Core type definitions used across the AlertHub workspace.

pub mod event_id;
pub mod id;

pub use event_id::EventId;
pub use id::*;
