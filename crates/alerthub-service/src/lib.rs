//! # alerthub-service
//!
//! Business logic services sitting between the HTTP layer and the
//! stores.
//!
//! ## Modules
//!
//! - `context` — The per-request caller identity
//! - `account` — The account directory: registration, login, the
//!   two-phase sensitive-update protocol, preferences, admin operations
//! - `alerts` — The alert scan that matches current events against every
//!   eligible user

pub mod account;
pub mod alerts;
pub mod context;

pub use account::AccountService;
pub use alerts::{AlertService, ScanSummary, UserAlerts};
pub use context::RequestContext;
