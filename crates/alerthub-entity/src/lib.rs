//! # alerthub-entity
//!
//! Domain entity models for AlertHub. Every struct in this crate is either
//! a persisted document record or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; persisted
//! records round-trip through the document store as JSON.

pub mod alert;
pub mod analysis;
pub mod event;
pub mod geo;
pub mod guest;
pub mod session;
pub mod user;
pub mod zone;
