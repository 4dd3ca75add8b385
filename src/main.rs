//! AlertHub Server — disaster monitoring and alerting.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use alerthub_alert::AlertDispatcher;
use alerthub_alert::notifier::SimulatedEmailSender;
use alerthub_api::{AppState, build_router};
use alerthub_auth::challenge::ChallengeRegistry;
use alerthub_auth::password::{PasswordHasher, PasswordRules};
use alerthub_auth::session::SessionManager;
use alerthub_core::config::AppConfig;
use alerthub_feed::{EventAggregator, HttpRiskAnalyzer, RiskAnalyzer};
use alerthub_service::{AccountService, AlertService};
use alerthub_store::collections::{
    GuestConfigCollection, LedgerCollection, SessionsCollection, UsersCollection,
};
use alerthub_worker::CronScheduler;

#[tokio::main]
async fn main() {
    let env = std::env::var("ALERTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(environment = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting AlertHub v{}", env!("CARGO_PKG_VERSION"));
    let config = Arc::new(config);

    // ── Step 1: Document store ───────────────────────────────────
    if config.store.backend == "memory" {
        tracing::warn!("Using the volatile in-memory store; nothing will survive a restart");
    }
    let store = alerthub_store::open(&config.store)
        .await
        .context("Failed to open the document store")?;

    let users = Arc::new(UsersCollection::new(store.clone()));
    let sessions_collection = Arc::new(SessionsCollection::new(store.clone()));
    let ledger = Arc::new(LedgerCollection::new(store.clone()));
    let guest_config = Arc::new(GuestConfigCollection::new(store));

    // ── Step 2: Auth system ──────────────────────────────────────
    let sessions = SessionManager::new(sessions_collection, users.clone());
    let rules = PasswordRules::new(&config.auth);
    let challenges = Arc::new(ChallengeRegistry::new(config.challenge.clone()));

    // ── Step 3: Account directory + admin bootstrap ──────────────
    let sender = Arc::new(SimulatedEmailSender::new());
    let account = Arc::new(AccountService::new(
        users.clone(),
        sessions.clone(),
        PasswordHasher::new(),
        rules.clone(),
        sender.clone(),
        config.auth.clone(),
        &config.notifier,
    ));
    account
        .bootstrap_admin()
        .await
        .context("Failed to bootstrap the admin account")?;

    // ── Step 4: Feeds and analysis ───────────────────────────────
    let http_client = reqwest::Client::new();
    let aggregator = Arc::new(EventAggregator::standard(
        http_client.clone(),
        &config.feeds,
    ));
    let analyzer: Arc<dyn RiskAnalyzer> =
        Arc::new(HttpRiskAnalyzer::new(http_client, config.analysis.clone()));

    // ── Step 5: Alert pipeline ───────────────────────────────────
    let dispatcher = AlertDispatcher::new(ledger, sender);
    let alerts = Arc::new(AlertService::new(
        users.clone(),
        aggregator.clone(),
        dispatcher,
    ));

    // ── Step 6: Scheduler ────────────────────────────────────────
    let mut scheduler = None;
    if config.scheduler.enabled {
        let mut cron = CronScheduler::new(config.scheduler.clone())
            .await
            .context("Failed to create the scheduler")?;
        cron.register_alert_scan(alerts.clone()).await?;
        cron.register_pending_sweep(users.clone(), &config.auth)
            .await?;
        cron.start().await?;
        scheduler = Some(cron);
    } else {
        tracing::warn!("Scheduler disabled; alerts only fire on manual admin scans");
    }

    // ── Step 7: HTTP server ──────────────────────────────────────
    let state = AppState {
        config: config.clone(),
        account,
        alerts,
        sessions,
        challenges,
        aggregator,
        analyzer,
        guest_config,
        rules,
    };
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("AlertHub listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server exited with an error")?;

    if let Some(mut cron) = scheduler {
        cron.shutdown().await?;
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolves when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
