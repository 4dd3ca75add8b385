//! Log-backed email delivery.

use async_trait::async_trait;
use tracing::{debug, info};

use alerthub_core::AppResult;

use super::{EmailMessage, EmailSender};

/// Writes every message to the log instead of sending it.
///
/// This is the deployed sender: the dashboard's email channel is simulated
/// end-to-end, so operators read deliveries off the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedEmailSender;

impl SimulatedEmailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for SimulatedEmailSender {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        if message.to.is_empty() {
            debug!(subject = %message.subject, "Skipped email with no recipient");
            return Ok(());
        }

        info!(
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "Email delivered (simulated)"
        );
        Ok(())
    }
}
