//! Human-verification arithmetic challenges.

pub mod registry;

pub use registry::{ChallengeOutcome, ChallengeRegistry, ChallengeView};
