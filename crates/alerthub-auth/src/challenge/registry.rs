//! In-memory registry of arithmetic verification challenges.

use dashmap::DashMap;
use rand::RngExt;
use serde::Serialize;
use tracing::debug;

use alerthub_core::AppResult;
use alerthub_core::config::ChallengeConfig;
use alerthub_core::error::AppError;
use alerthub_core::types::ChallengeId;

/// What a client sees of a challenge: the id and the two operands.
///
/// The expected answer stays server-side.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeView {
    pub id: ChallengeId,
    pub a: u32,
    pub b: u32,
}

/// Result of submitting an answer.
#[derive(Debug, Clone)]
pub enum ChallengeOutcome {
    /// The answer was correct; the challenge is now solved and can gate
    /// one protected operation.
    Verified,
    /// The answer was wrong. The challenge got a fresh operand pair so
    /// the client cannot brute-force a single sum.
    Incorrect(ChallengeView),
}

#[derive(Debug)]
struct ChallengeState {
    a: u32,
    b: u32,
    solved: bool,
}

/// Issues and checks simple `a + b` challenges.
///
/// Challenges live in process memory only; a restart clears them all,
/// which just means open forms re-request one.
#[derive(Debug)]
pub struct ChallengeRegistry {
    entries: DashMap<ChallengeId, ChallengeState>,
    config: ChallengeConfig,
}

impl ChallengeRegistry {
    /// Creates a registry with the given operand bounds.
    pub fn new(config: ChallengeConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    fn random_pair(&self) -> (u32, u32) {
        let mut rng = rand::rng();
        let min = u32::from(self.config.operand_min);
        let max = u32::from(self.config.operand_max);
        let a = rng.random_range(min..=max);
        let b = rng.random_range(min..=max);
        (a, b)
    }

    /// Mint a new unsolved challenge.
    pub fn issue(&self) -> ChallengeView {
        let id = ChallengeId::new();
        let (a, b) = self.random_pair();
        self.entries.insert(id, ChallengeState { a, b, solved: false });
        debug!(challenge_id = %id, "Challenge issued");
        ChallengeView { id, a, b }
    }

    /// Check an answer against a pending challenge.
    ///
    /// A correct answer marks the challenge solved. A wrong answer swaps
    /// in a new operand pair under the same id and reports it back so the
    /// client can retry.
    pub fn submit(&self, id: ChallengeId, answer: u32) -> AppResult<ChallengeOutcome> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Challenge not found or expired"))?;

        if answer == entry.a + entry.b {
            entry.solved = true;
            debug!(challenge_id = %id, "Challenge solved");
            return Ok(ChallengeOutcome::Verified);
        }

        let (a, b) = self.random_pair();
        entry.a = a;
        entry.b = b;
        entry.solved = false;
        debug!(challenge_id = %id, "Wrong answer, challenge regenerated");
        Ok(ChallengeOutcome::Incorrect(ChallengeView { id, a, b }))
    }

    /// Replace a challenge's operands and reset it to unsolved.
    ///
    /// Used when the client re-opens the form or explicitly asks for a
    /// new pair.
    pub fn refresh(&self, id: ChallengeId) -> AppResult<ChallengeView> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Challenge not found or expired"))?;

        let (a, b) = self.random_pair();
        entry.a = a;
        entry.b = b;
        entry.solved = false;
        Ok(ChallengeView { id, a, b })
    }

    /// Consume a solved challenge, returning whether one was consumed.
    ///
    /// Only a solved entry is removed; an unsolved or unknown id leaves
    /// the registry untouched and returns `false`, so the client's pending
    /// challenge keeps working.
    pub fn consume_verified(&self, id: ChallengeId) -> bool {
        let solved = self
            .entries
            .get(&id)
            .map(|entry| entry.solved)
            .unwrap_or(false);
        if solved {
            self.entries.remove(&id);
        }
        solved
    }
}
