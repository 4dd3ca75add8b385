//! Capturing email sender for tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use alerthub_core::AppResult;

use super::{EmailMessage, EmailSender};

/// Records every delivered message in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct CapturingEmailSender {
    messages: Mutex<Vec<EmailMessage>>,
}

impl CapturingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far.
    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.messages.lock().await.clone()
    }

    /// Number of messages sent so far.
    pub async fn count(&self) -> usize {
        self.messages.lock().await.len()
    }
}

#[async_trait]
impl EmailSender for CapturingEmailSender {
    fn name(&self) -> &str {
        "capture"
    }

    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        if message.to.is_empty() {
            return Ok(());
        }
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}
