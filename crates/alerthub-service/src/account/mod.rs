//! The account directory.
//!
//! Owns user records end to end: registration, credential checks, the
//! two-phase sensitive-update protocol, preference updates, and the
//! admin operations. All mutation goes through this service; handlers
//! never touch the users collection directly.

pub mod admin;
pub mod preferences;
pub mod profile;

use std::sync::Arc;

use tracing::{info, warn};

use alerthub_alert::notifier::{EmailMessage, EmailSender};
use alerthub_auth::password::{PasswordHasher, PasswordRules};
use alerthub_auth::session::SessionManager;
use alerthub_core::config::{AuthConfig, NotifierConfig};
use alerthub_core::error::AppError;
use alerthub_core::types::UserId;
use alerthub_core::AppResult;
use alerthub_entity::session::Session;
use alerthub_entity::user::{User, UserRole};
use alerthub_store::collections::UsersCollection;

use crate::context::RequestContext;

pub use preferences::PreferencesUpdate;
pub use profile::{ProfileUpdateOutcome, ProfileUpdateRequest};

/// User directory and account lifecycle service.
pub struct AccountService {
    users: Arc<UsersCollection>,
    sessions: SessionManager,
    hasher: PasswordHasher,
    rules: PasswordRules,
    sender: Arc<dyn EmailSender>,
    auth: AuthConfig,
    public_url: String,
}

impl AccountService {
    /// Creates the account service.
    pub fn new(
        users: Arc<UsersCollection>,
        sessions: SessionManager,
        hasher: PasswordHasher,
        rules: PasswordRules,
        sender: Arc<dyn EmailSender>,
        auth: AuthConfig,
        notifier: &NotifierConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            rules,
            sender,
            auth,
            public_url: notifier.public_url.clone(),
        }
    }

    /// Register a new account and open its first session.
    ///
    /// The account starts with default preferences, the given email
    /// unverified, and an activation email on its way. The caller is
    /// responsible for gating this behind the human-verification
    /// challenge.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> AppResult<(Session, User)> {
        // 1. Password rules first; cheap and most common failure.
        self.rules.validate(password)?;

        // 2. Create the record with default preferences and the email
        //    staged as unverified.
        let password_hash = self.hasher.hash(password)?;
        let mut user = User::new(username, password_hash, UserRole::User);
        user.preferences.email = email.to_string();

        // 3. Insert; a taken username surfaces as a conflict.
        self.users.insert(user.clone()).await?;
        info!(user_id = %user.id, username = %user.username, "User registered");

        // 4. Activation email is fire-and-forget; registration already
        //    succeeded.
        let message = EmailMessage::verification(email, &self.public_url, user.id);
        if let Err(error) = self.sender.send(&message).await {
            warn!(user_id = %user.id, %error, "Activation email failed to send");
        }

        // 5. Registration doubles as the first login.
        let session = self.sessions.open(user.id).await?;
        Ok((session, user))
    }

    /// Check credentials and open a session.
    ///
    /// Both unknown-username and wrong-password collapse into the same
    /// generic error so the response never reveals which field was wrong.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(Session, User)> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AppError::authentication("Invalid credentials"));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let session = self.sessions.open(user.id).await?;
        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok((session, user))
    }

    /// End the caller's session.
    pub async fn logout(&self, context: &RequestContext) -> AppResult<()> {
        self.sessions.close(context.session_id).await
    }

    /// Load a user by id.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User not found: {user_id}")))
    }
}


#[cfg(test)]
mod tests {
    use super::testing;
    use alerthub_core::error::ErrorKind;

    #[tokio::test]
    async fn test_register_opens_session_and_sends_activation() {
        let directory = testing::directory();

        let (session, user) = directory
            .service
            .register("maria", "hunter22", "maria@example.com")
            .await
            .unwrap();

        assert_eq!(session.user_id, user.id);
        assert_eq!(user.preferences.email, "maria@example.com");
        assert!(!user.preferences.email_verified);

        let sent = directory.sender.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "maria@example.com");
        assert!(sent[0].body.contains(&format!("verify_user={}", user.id)));
    }

    #[tokio::test]
    async fn test_register_rejects_taken_username() {
        let directory = testing::directory();
        directory
            .service
            .register("maria", "hunter22", "maria@example.com")
            .await
            .unwrap();

        let err = directory
            .service
            .register("maria", "other-pass", "other@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let directory = testing::directory();
        let err = directory
            .service
            .register("maria", "12345", "maria@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(directory.sender.count().await, 0);
    }

    #[tokio::test]
    async fn test_login_with_good_and_bad_credentials() {
        let directory = testing::directory();
        directory
            .service
            .register("maria", "hunter22", "maria@example.com")
            .await
            .unwrap();

        assert!(directory.service.login("maria", "hunter22").await.is_ok());

        let wrong_pass = directory.service.login("maria", "wrong").await.unwrap_err();
        let unknown_user = directory
            .service
            .login("nobody", "hunter22")
            .await
            .unwrap_err();
        // Same generic message either way.
        assert_eq!(wrong_pass.message, "Invalid credentials");
        assert_eq!(unknown_user.message, "Invalid credentials");
    }
}
