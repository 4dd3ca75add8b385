//! Ledger-deduplicated alert delivery.

use std::sync::Arc;

use tracing::{info, warn};

use alerthub_core::AppResult;
use alerthub_entity::alert::SentAlert;
use alerthub_entity::event::DisasterEvent;
use alerthub_entity::user::User;
use alerthub_store::collections::LedgerCollection;

use crate::matcher;
use crate::notifier::{EmailMessage, EmailSender};

/// Runs the alert pipeline for one user over a batch of events.
///
/// The dispatcher assumes the caller has already established that the user
/// may receive alerts at all (see `UserPreferences::can_receive_alerts`);
/// its own job is matching, delivery, and the exactly-once ledger.
#[derive(Clone)]
pub struct AlertDispatcher {
    ledger: Arc<LedgerCollection>,
    sender: Arc<dyn EmailSender>,
}

impl AlertDispatcher {
    /// Creates a dispatcher over the ledger and an email sender.
    pub fn new(ledger: Arc<LedgerCollection>, sender: Arc<dyn EmailSender>) -> Self {
        Self { ledger, sender }
    }

    /// Match `events` against the user's preferences and deliver alerts,
    /// returning the titles of the events that fired.
    ///
    /// Events already in the user's ledger are skipped. Delivery is
    /// fire-and-forget: a failed send is logged and the event is still
    /// recorded, so one broken mailbox cannot wedge the scan into
    /// re-alerting forever. The ledger is read once up front and written
    /// once at the end.
    pub async fn dispatch(&self, user: &User, events: &[DisasterEvent]) -> AppResult<Vec<String>> {
        // 1. What this user has already been told about.
        let already_sent = self.ledger.sent_event_ids(user.id).await?;

        // 2. Walk events in feed order, sending as we go.
        let mut fired = Vec::new();
        let mut titles = Vec::new();
        for event in events {
            if already_sent.contains(&event.id) {
                continue;
            }

            let decision = matcher::evaluate(event, &user.preferences);
            if !decision.fire {
                continue;
            }

            let message = EmailMessage::alert(
                &user.preferences.email,
                event,
                decision.matched_zone.as_deref(),
            );
            match self.sender.send(&message).await {
                Ok(()) => {
                    info!(
                        user_id = %user.id,
                        event_id = %event.id,
                        title = %event.title,
                        zone = decision.matched_zone.as_deref().unwrap_or(""),
                        "Alert dispatched"
                    );
                }
                Err(error) => {
                    warn!(
                        user_id = %user.id,
                        event_id = %event.id,
                        %error,
                        "Alert email failed, recording anyway"
                    );
                }
            }
            fired.push(SentAlert::new(user.id, event.id.clone()));
            titles.push(event.title.clone());
        }

        // 3. One ledger write per run.
        self.ledger.append(fired).await?;
        Ok(titles)
    }
}
