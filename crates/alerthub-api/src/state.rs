//! Application state shared across all handlers.

use std::sync::Arc;

use alerthub_auth::challenge::ChallengeRegistry;
use alerthub_auth::password::PasswordRules;
use alerthub_auth::session::SessionManager;
use alerthub_core::config::AppConfig;
use alerthub_feed::{EventAggregator, RiskAnalyzer};
use alerthub_service::{AccountService, AlertService};
use alerthub_store::collections::GuestConfigCollection;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped (or internally shared) for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Account directory: registration, login, profile protocol.
    pub account: Arc<AccountService>,
    /// Alert scan orchestration.
    pub alerts: Arc<AlertService>,
    /// Bearer-token session resolution.
    pub sessions: SessionManager,
    /// Human-verification challenges.
    pub challenges: Arc<ChallengeRegistry>,
    /// Aggregated hazard feed.
    pub aggregator: Arc<EventAggregator>,
    /// Risk analysis provider.
    pub analyzer: Arc<dyn RiskAnalyzer>,
    /// Pre-login alert configuration blob.
    pub guest_config: Arc<GuestConfigCollection>,
    /// Password form rules, used for confirmation checks at the API edge.
    pub rules: PasswordRules,
}
