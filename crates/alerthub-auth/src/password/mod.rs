//! Password hashing and account password rules.

pub mod hasher;
pub mod rules;

pub use hasher::PasswordHasher;
pub use rules::PasswordRules;
