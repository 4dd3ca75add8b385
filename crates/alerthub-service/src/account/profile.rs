//! The two-phase sensitive-update protocol and email verification.

use tracing::{info, warn};

use alerthub_alert::notifier::EmailMessage;
use alerthub_core::AppResult;
use alerthub_core::error::AppError;
use alerthub_core::types::{UserId, VerificationToken};
use alerthub_entity::user::{PendingUpdate, User};

use super::AccountService;

/// Requested sensitive changes. Either field absent means "leave it".
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdateRequest {
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement plaintext password.
    pub new_password: Option<String>,
}

/// What came of a profile update.
#[derive(Debug, Clone)]
pub struct ProfileUpdateOutcome {
    /// The live record after the call; staged values are not in it.
    pub user: User,
    /// Whether changes were staged rather than applied.
    pub pending: bool,
    /// Human-readable status line for the client.
    pub message: String,
}

impl AccountService {
    /// Stage a sensitive profile change.
    ///
    /// Email and password never hit the live record here. A detected
    /// change builds one fresh [`PendingUpdate`] carrying both staged
    /// values and a new token; any earlier pending record is replaced,
    /// which invalidates its token. The confirmation link goes to the
    /// new address when the email is changing, otherwise to the current
    /// one. Submitting the current email and no password is a quiet
    /// success.
    ///
    /// The human-verification gate is the calling handler's job; the
    /// directory trusts that it was passed.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: ProfileUpdateRequest,
    ) -> AppResult<ProfileUpdateOutcome> {
        let mut user = self.get_user(user_id).await?;

        // 1. Work out what is actually changing.
        let new_email = request
            .email
            .filter(|email| *email != user.preferences.email);
        let new_password_hash = match request.new_password.as_deref() {
            Some(password) if !password.is_empty() => {
                self.rules.validate(password)?;
                Some(self.hasher.hash(password)?)
            }
            _ => None,
        };

        if new_email.is_none() && new_password_hash.is_none() {
            return Ok(ProfileUpdateOutcome {
                user,
                pending: false,
                message: "Profile updated successfully".to_string(),
            });
        }

        // 2. Stage everything into one fresh pending record.
        let mut pending = PendingUpdate::new();
        pending.new_email = new_email;
        pending.new_password_hash = new_password_hash;

        let target_email = pending
            .new_email
            .clone()
            .unwrap_or_else(|| user.preferences.email.clone());
        let changes_password = pending.new_password_hash.is_some();
        let token = pending.verification_token;

        user.pending_update = Some(pending);
        self.users.save(user.clone()).await?;
        info!(
            user_id = %user.id,
            changes_email = target_email != user.preferences.email,
            changes_password,
            "Sensitive profile update staged"
        );

        // 3. Confirmation email is fire-and-forget; the staged record is
        //    already durable.
        let message = EmailMessage::update_confirmation(
            &target_email,
            &self.public_url,
            &token,
            changes_password,
        );
        if let Err(error) = self.sender.send(&message).await {
            warn!(user_id = %user.id, %error, "Confirmation email failed to send");
        }

        Ok(ProfileUpdateOutcome {
            user,
            pending: true,
            message: format!(
                "Verification link sent to {target_email}. Changes will apply after confirmation."
            ),
        })
    }

    /// Resolve a confirmation token and apply the staged changes.
    ///
    /// Returns `false` for an unknown, already-consumed, or stale token;
    /// nothing is mutated in those cases. On a match the staged email
    /// (auto-verified) and/or password hash land on the live record and
    /// the pending record is cleared, making the token single-use.
    pub async fn confirm_pending_update(&self, token: VerificationToken) -> AppResult<bool> {
        let Some(mut user) = self.users.find_by_pending_token(token).await? else {
            return Ok(false);
        };
        let Some(pending) = user.pending_update.take() else {
            return Ok(false);
        };

        if pending.is_stale(self.auth.pending_update_ttl_hours) {
            info!(user_id = %user.id, "Rejected stale pending update token");
            return Ok(false);
        }

        if let Some(new_email) = pending.new_email {
            user.preferences.email = new_email;
            // The owner proved control of the new address by following
            // the link.
            user.preferences.email_verified = true;
        }
        if let Some(new_hash) = pending.new_password_hash {
            user.password_hash = new_hash;
        }

        self.users.save(user.clone()).await?;
        info!(user_id = %user.id, "Pending update confirmed and applied");
        Ok(true)
    }

    /// Activation-path verification: mark the account email verified.
    ///
    /// Idempotent; verifying an already-verified account reports success
    /// without writing. Unknown ids report `false` so confirmation links
    /// stay silent no-ops.
    pub async fn verify_user_email(&self, user_id: UserId) -> AppResult<bool> {
        let Some(mut user) = self.users.find_by_id(user_id).await? else {
            return Ok(false);
        };
        if user.preferences.email_verified {
            return Ok(true);
        }

        user.preferences.email_verified = true;
        self.users.save(user).await?;
        info!(user_id = %user_id, "Email verified");
        Ok(true)
    }

    /// Re-send the activation email for an unverified account.
    pub async fn resend_verification(&self, user_id: UserId) -> AppResult<()> {
        let user = self.get_user(user_id).await?;
        if user.preferences.email.is_empty() {
            return Err(AppError::validation("No email address on file"));
        }
        if user.preferences.email_verified {
            return Err(AppError::validation("Email is already verified"));
        }

        let message =
            EmailMessage::verification(&user.preferences.email, &self.public_url, user.id);
        self.sender.send(&message).await
    }
}
