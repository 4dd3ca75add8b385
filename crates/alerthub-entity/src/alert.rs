//! Sent-alert ledger entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use alerthub_core::types::{EventId, UserId};

/// One delivered (or attempted) alert, recorded for deduplication.
///
/// The ledger is append-only and never evicted; an entry exists whether
/// or not the underlying send succeeded, so an event alerts a given user
/// at most once, ever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentAlert {
    /// The notified user.
    pub user_id: UserId,
    /// The event the alert was for.
    pub event_id: EventId,
    /// When the alert was recorded.
    pub sent_at: DateTime<Utc>,
}

impl SentAlert {
    /// Record an alert for a user/event pair at the current time.
    pub fn new(user_id: UserId, event_id: EventId) -> Self {
        Self {
            user_id,
            event_id,
            sent_at: Utc::now(),
        }
    }
}
