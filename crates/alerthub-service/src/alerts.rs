//! The alert scan: fresh feed in, emails out.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use alerthub_alert::AlertDispatcher;
use alerthub_core::AppResult;
use alerthub_feed::EventAggregator;
use alerthub_store::collections::UsersCollection;

/// Runs the periodic alert scan over every eligible user.
///
/// Both the scheduler tick and the admin's manual trigger land here, so
/// the two paths cannot drift apart.
pub struct AlertService {
    users: Arc<UsersCollection>,
    aggregator: Arc<EventAggregator>,
    dispatcher: AlertDispatcher,
}

/// What one scan did, reported back to the admin endpoint and the logs.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    /// Users whose preferences allowed delivery and were evaluated.
    pub users_scanned: usize,
    /// Alert emails recorded across all of them.
    pub alerts_sent: usize,
    /// Which event titles fired, per user. Users with no new alerts are
    /// omitted.
    pub fired: Vec<UserAlerts>,
}

/// The alerts that fired for one user in a scan.
#[derive(Debug, Clone, Serialize)]
pub struct UserAlerts {
    pub username: String,
    pub titles: Vec<String>,
}

impl AlertService {
    /// Creates the alert service.
    pub fn new(
        users: Arc<UsersCollection>,
        aggregator: Arc<EventAggregator>,
        dispatcher: AlertDispatcher,
    ) -> Self {
        Self {
            users,
            aggregator,
            dispatcher,
        }
    }

    /// Fetch the feed fresh and run the matcher for every eligible user.
    ///
    /// Users with notifications off, no email, or an unverified email are
    /// skipped before any matching happens. A dispatch failure for one
    /// user is logged and does not stop the scan.
    pub async fn scan_all(&self) -> AppResult<ScanSummary> {
        let events = self.aggregator.refresh().await;
        let users = self.users.list().await?;

        let mut summary = ScanSummary {
            users_scanned: 0,
            alerts_sent: 0,
            fired: Vec::new(),
        };
        for user in &users {
            if !user.preferences.can_receive_alerts() {
                continue;
            }
            summary.users_scanned += 1;

            match self.dispatcher.dispatch(user, &events).await {
                Ok(titles) if !titles.is_empty() => {
                    summary.alerts_sent += titles.len();
                    summary.fired.push(UserAlerts {
                        username: user.username.clone(),
                        titles,
                    });
                }
                Ok(_) => {}
                Err(error) => {
                    warn!(user_id = %user.id, %error, "Alert dispatch failed for user");
                }
            }
        }

        info!(
            users_scanned = summary.users_scanned,
            alerts_sent = summary.alerts_sent,
            events = events.len(),
            "Alert scan complete"
        );
        Ok(summary)
    }
}
