//! User directory commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::output::{self, print_list, print_success};

use super::Cli;

/// User management arguments
#[derive(Debug, Args)]
pub struct UserArgs {
    /// Action to perform
    #[command(subcommand)]
    pub action: UserAction,
}

/// User management actions
#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// List all users (admin)
    List,
    /// Delete a user by id (admin)
    Delete {
        /// User id
        id: String,
    },
    /// Mark a user's email verified via the activation path
    Verify {
        /// User id
        id: String,
    },
}

/// One user row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    username: String,
    role: String,
    email: String,
    verified: bool,
    pending: bool,
}

impl UserRow {
    fn from_value(value: &Value) -> Self {
        let preferences = &value["preferences"];
        Self {
            id: value["id"].as_str().unwrap_or_default().to_string(),
            username: value["username"].as_str().unwrap_or_default().to_string(),
            role: value["role"].as_str().unwrap_or_default().to_string(),
            email: preferences["email"].as_str().unwrap_or_default().to_string(),
            verified: preferences["email_verified"].as_bool().unwrap_or(false),
            pending: value["has_pending_update"].as_bool().unwrap_or(false),
        }
    }
}

/// Execute a user command
pub async fn execute(args: &UserArgs, cli: &Cli) -> anyhow::Result<()> {
    match &args.action {
        UserAction::List => {
            let client = cli.admin_client().await?;
            let data = client.get("/api/admin/users").await?;
            let rows: Vec<UserRow> = data
                .as_array()
                .map(|users| users.iter().map(UserRow::from_value).collect())
                .unwrap_or_default();
            print_list(&rows, cli.format);
        }
        UserAction::Delete { id } => {
            let client = cli.admin_client().await?;
            client.delete(&format!("/api/admin/users/{id}")).await?;
            print_success(&format!("Deleted user {id}"));
        }
        UserAction::Verify { id } => {
            // The activation link endpoint; unauthenticated and idempotent.
            let data = cli
                .client()
                .get(&format!("/api/confirm?verify_user={id}"))
                .await?;
            if data["verified_user"].as_bool().unwrap_or(false) {
                print_success(&format!("Verified email for user {id}"));
            } else {
                output::print_error(&format!("No such user: {id}"));
            }
        }
    }
    Ok(())
}
