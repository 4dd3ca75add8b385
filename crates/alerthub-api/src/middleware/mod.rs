//! Tower layers and route guards.

pub mod cors;
pub mod rbac;
