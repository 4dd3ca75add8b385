//! Shared test helpers for integration tests.
//!
//! Boots the full API router on the in-memory store with a capturing
//! email sender and a fixed event feed, so tests drive nothing but HTTP.

// Each test binary compiles this module; not all of them use every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use alerthub_alert::AlertDispatcher;
use alerthub_alert::notifier::CapturingEmailSender;
use alerthub_api::{AppState, build_router};
use alerthub_auth::challenge::ChallengeRegistry;
use alerthub_auth::password::{PasswordHasher, PasswordRules};
use alerthub_auth::session::SessionManager;
use alerthub_core::AppResult;
use alerthub_core::config::{AnalysisConfig, AppConfig, FeedsConfig};
use alerthub_entity::event::DisasterEvent;
use alerthub_feed::{EventAggregator, FeedProvider, HttpRiskAnalyzer, RiskAnalyzer};
use alerthub_service::{AccountService, AlertService};
use alerthub_store::backends::memory::MemoryDocumentStore;
use alerthub_store::collections::{
    GuestConfigCollection, LedgerCollection, SessionsCollection, UsersCollection,
};

/// Build one feed event for test scenarios.
pub fn make_event(
    id: &str,
    title: &str,
    kind: alerthub_entity::event::DisasterType,
    severity: alerthub_entity::event::SeverityLevel,
    lat: f64,
    lng: f64,
) -> DisasterEvent {
    DisasterEvent {
        id: alerthub_core::types::EventId::new(id),
        title: title.to_string(),
        kind,
        severity,
        location: alerthub_entity::geo::Coordinates::new(lat, lng),
        country: "Philippines".to_string(),
        description: "Test event.".to_string(),
        affected_population: None,
        timestamp: chrono::Utc::now(),
        source: Some("test".to_string()),
        is_prediction: None,
    }
}

/// A feed provider that serves a fixed event list.
struct FixedFeed(Vec<DisasterEvent>);

#[async_trait::async_trait]
impl FeedProvider for FixedFeed {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch(&self) -> AppResult<Vec<DisasterEvent>> {
        Ok(self.0.clone())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Every email the system tried to send
    pub sender: Arc<CapturingEmailSender>,
}

impl TestApp {
    /// Create a test application with an empty event feed.
    pub async fn new() -> Self {
        Self::with_events(Vec::new()).await
    }

    /// Create a test application whose feed serves exactly `events`.
    ///
    /// The bootstrap admin account (`admin` / `admin123`) exists and is
    /// verified, as it would be on a freshly started server.
    pub async fn with_events(events: Vec<DisasterEvent>) -> Self {
        let config = Arc::new(AppConfig::default());

        let store = Arc::new(MemoryDocumentStore::new());
        let users = Arc::new(UsersCollection::new(store.clone()));
        let sessions_collection = Arc::new(SessionsCollection::new(store.clone()));
        let ledger = Arc::new(LedgerCollection::new(store.clone()));
        let guest_config = Arc::new(GuestConfigCollection::new(store));

        let sessions = SessionManager::new(sessions_collection, users.clone());
        let rules = PasswordRules::new(&config.auth);
        let challenges = Arc::new(ChallengeRegistry::new(config.challenge.clone()));
        let sender = Arc::new(CapturingEmailSender::new());

        let account = Arc::new(AccountService::new(
            users.clone(),
            sessions.clone(),
            PasswordHasher::new(),
            rules.clone(),
            sender.clone(),
            config.auth.clone(),
            &config.notifier,
        ));
        account.bootstrap_admin().await.expect("bootstrap admin");

        let feeds = FeedsConfig {
            include_seed_events: false,
            ..FeedsConfig::default()
        };
        let aggregator = Arc::new(EventAggregator::new(
            vec![Arc::new(FixedFeed(events))],
            &feeds,
        ));
        // No API key configured, so the analyzer stays offline.
        let analyzer: Arc<dyn RiskAnalyzer> = Arc::new(HttpRiskAnalyzer::new(
            reqwest::Client::new(),
            AnalysisConfig::default(),
        ));

        let dispatcher = AlertDispatcher::new(ledger, sender.clone());
        let alerts = Arc::new(AlertService::new(
            users.clone(),
            aggregator.clone(),
            dispatcher,
        ));

        let state = AppState {
            config,
            account,
            alerts,
            sessions,
            challenges,
            aggregator,
            analyzer,
            guest_config,
            rules,
        };

        Self {
            router: build_router(state),
            sender,
        }
    }

    /// Send one request through the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Fetch a fresh challenge and return its id and correct answer.
    pub async fn solve_challenge(&self) -> (String, u64) {
        let response = self.request("GET", "/api/challenge", None, None).await;
        assert_eq!(response.status, StatusCode::OK);
        let data = response.data();
        let id = data["id"].as_str().expect("challenge id").to_string();
        let answer = data["a"].as_u64().unwrap() + data["b"].as_u64().unwrap();
        (id, answer)
    }

    /// Register a user through the API, solving the challenge gate.
    /// Returns the session token and the new user's id.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> (String, String) {
        let (challenge_id, answer) = self.solve_challenge().await;
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                    "confirm_password": password,
                    "email": email,
                    "challenge_id": challenge_id,
                    "challenge_answer": answer,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "register failed: {:?}", response.body);
        let data = response.data();
        (
            data["token"].as_str().unwrap().to_string(),
            data["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Log in and return the session token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.data()["token"].as_str().unwrap().to_string()
    }

    /// Log in as the bootstrap admin.
    pub async fn admin_token(&self) -> String {
        self.login("admin", "admin123").await
    }

    /// Mark a user's email verified through the activation link.
    pub async fn verify_email(&self, user_id: &str) {
        let response = self
            .request(
                "GET",
                &format!("/api/confirm?verify_user={user_id}"),
                None,
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.data()["verified_user"], true);
    }

    /// Extract the pending-update token from the most recent
    /// confirmation email.
    pub async fn last_confirmation_token(&self) -> String {
        let sent = self.sender.sent().await;
        let body = &sent.last().expect("no emails captured").body;
        let marker = "confirm_update=";
        let start = body.find(marker).expect("no confirmation link in email") + marker.len();
        body[start..]
            .split_whitespace()
            .next()
            .unwrap()
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}
