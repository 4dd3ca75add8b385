//! # alerthub-auth
//!
//! Authentication building blocks for AlertHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id hashing and the account password rules
//! - `session` — Opaque bearer-token session lifecycle
//! - `challenge` — The arithmetic human-verification challenge

pub mod challenge;
pub mod password;
pub mod session;

pub use challenge::ChallengeRegistry;
pub use password::{PasswordHasher, PasswordRules};
pub use session::SessionManager;
