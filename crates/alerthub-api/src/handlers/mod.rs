//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod challenge;
pub mod confirm;
pub mod events;
pub mod guest;
pub mod health;
pub mod user;
