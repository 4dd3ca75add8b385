//! Email delivery seam and message rendering.
//!
//! AlertHub does not speak SMTP. Deliveries go through the [`EmailSender`]
//! trait; the default implementation writes the rendered message to the
//! log, which is what the dashboard deployment runs with. Swapping in a
//! real provider means implementing the trait, nothing else.

pub mod capture;
pub mod simulated;

use async_trait::async_trait;

use alerthub_core::AppResult;
use alerthub_core::types::{UserId, VerificationToken};
use alerthub_entity::event::DisasterEvent;

pub use capture::CapturingEmailSender;
pub use simulated::SimulatedEmailSender;

/// A rendered, ready-to-send email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// Render a disaster alert.
    ///
    /// When a watch zone triggered (or co-triggered) the alert, the body
    /// names it so the user knows which of their zones fired.
    pub fn alert(to: impl Into<String>, event: &DisasterEvent, matched_zone: Option<&str>) -> Self {
        let mut body = format!(
            "Warning: {} severity {} detected in {}.\n",
            event.severity, event.kind, event.country
        );
        if let Some(zone) = matched_zone {
            body.push_str(&format!("Triggered by Watch Zone: {zone}\n"));
        }
        body.push_str(&format!("Impact prediction: {}", event.description));

        Self {
            to: to.into(),
            subject: format!("ALERTHUB ALERT - {}", event.title),
            body,
        }
    }

    /// Render the account-activation email sent at registration.
    pub fn verification(to: impl Into<String>, public_url: &str, user_id: UserId) -> Self {
        Self {
            to: to.into(),
            subject: "Verify your AlertHub email".to_string(),
            body: format!("Please click to verify: {public_url}?verify_user={user_id}"),
        }
    }

    /// Render the confirmation email for a pending profile update.
    ///
    /// `changes_password` selects the wording; a combined email-and-password
    /// update reads as a password change.
    pub fn update_confirmation(
        to: impl Into<String>,
        public_url: &str,
        token: &VerificationToken,
        changes_password: bool,
    ) -> Self {
        let target = if changes_password { "password" } else { "email" };
        Self {
            to: to.into(),
            subject: "Confirm your AlertHub account changes".to_string(),
            body: format!(
                "A request was made to update your {target}.\n\
                 Please click the link below to confirm and apply these changes:\n\
                 {public_url}?confirm_update={token}\n\
                 If you did not request this, please ignore this email."
            ),
        }
    }
}

/// Something that can deliver an [`EmailMessage`].
///
/// Implementations must treat a message with an empty recipient as a
/// quiet no-op rather than an error; eligibility checks upstream normally
/// prevent that case, this is the backstop.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Short implementation name for logs.
    fn name(&self) -> &str;

    /// Deliver one message.
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}
