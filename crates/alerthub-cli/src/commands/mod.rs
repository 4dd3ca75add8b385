//! CLI command definitions and dispatch.

pub mod events;
pub mod health;
pub mod scan;
pub mod user;

use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::client::ApiClient;
use crate::output::OutputFormat;

/// AlertHub — disaster monitoring and alerting
#[derive(Debug, Parser)]
#[command(name = "alerthub", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the AlertHub API
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Username for commands that require an admin session
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for the admin session; prompted when omitted
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User directory management
    User(user::UserArgs),
    /// Event feed inspection
    Events(events::EventsArgs),
    /// Run one alert scan now
    Scan,
    /// Check API health
    Health,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::User(args) => user::execute(args, self).await,
            Commands::Events(args) => events::execute(args, self).await,
            Commands::Scan => scan::execute(self).await,
            Commands::Health => health::execute(self).await,
        }
    }

    /// An unauthenticated client against the configured API.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.api_url)
    }

    /// A client logged in with the admin credentials from the flags,
    /// prompting for the password when it was not supplied.
    pub async fn admin_client(&self) -> anyhow::Result<ApiClient> {
        let username = self
            .username
            .clone()
            .ok_or_else(|| anyhow::anyhow!("--username is required for this command"))?;
        let password = match &self.password {
            Some(password) => password.clone(),
            None => Password::new()
                .with_prompt(format!("Password for {username}"))
                .interact()?,
        };

        let mut client = self.client();
        client.login(&username, &password).await?;
        Ok(client)
    }
}
