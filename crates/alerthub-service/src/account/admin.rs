//! Administrative account operations.

use tracing::info;

use alerthub_core::AppResult;
use alerthub_core::error::AppError;
use alerthub_core::types::UserId;
use alerthub_entity::user::{User, UserRole};

use crate::context::RequestContext;

use super::AccountService;

impl AccountService {
    /// List every account in the directory.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Delete an account and revoke its sessions.
    ///
    /// Two accounts are off limits: the caller's own, and any other
    /// administrator.
    pub async fn delete_user(&self, context: &RequestContext, target_id: UserId) -> AppResult<()> {
        if context.user_id == target_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        let target = self.get_user(target_id).await?;
        if target.is_admin() {
            return Err(AppError::authorization(
                "Administrator accounts cannot be deleted",
            ));
        }

        self.users.delete(target_id).await?;
        self.sessions.close_for_user(target_id).await?;
        info!(
            admin = %context.username,
            deleted_user = %target.username,
            "Account deleted"
        );
        Ok(())
    }

    /// Ensure the configured administrator account exists.
    ///
    /// Runs at startup. The admin's email is marked verified so operational
    /// alerts can reach it without a confirmation round-trip.
    pub async fn bootstrap_admin(&self) -> AppResult<()> {
        if self
            .users
            .find_by_username(&self.auth.admin_username)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hash = self.hasher.hash(&self.auth.admin_password)?;
        let mut admin = User::new(self.auth.admin_username.clone(), hash, UserRole::Admin);
        admin.preferences.email = self.auth.admin_email.clone();
        admin.preferences.email_verified = true;

        self.users.insert(admin).await?;
        info!(username = %self.auth.admin_username, "Admin account initialized");
        Ok(())
    }
}
