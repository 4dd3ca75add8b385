//! Event feed commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::output::{print_item, print_list};

use super::Cli;

/// Event feed arguments
#[derive(Debug, Args)]
pub struct EventsArgs {
    /// Action to perform
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Event feed actions
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List the current aggregated feed
    List,
    /// Fetch the risk analysis for one event
    Analysis {
        /// Event id
        id: String,
    },
}

/// One event row for table output
#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    id: String,
    title: String,
    #[tabled(rename = "type")]
    kind: String,
    severity: String,
    country: String,
    timestamp: String,
}

impl EventRow {
    fn from_value(value: &Value) -> Self {
        Self {
            id: value["id"].as_str().unwrap_or_default().to_string(),
            title: value["title"].as_str().unwrap_or_default().to_string(),
            kind: value["type"].as_str().unwrap_or_default().to_string(),
            severity: value["severity"].as_str().unwrap_or_default().to_string(),
            country: value["country"].as_str().unwrap_or_default().to_string(),
            timestamp: value["timestamp"].as_str().unwrap_or_default().to_string(),
        }
    }
}

/// Execute an events command
pub async fn execute(args: &EventsArgs, cli: &Cli) -> anyhow::Result<()> {
    match &args.action {
        EventsAction::List => {
            let data = cli.client().get("/api/events").await?;
            let rows: Vec<EventRow> = data
                .as_array()
                .map(|events| events.iter().map(EventRow::from_value).collect())
                .unwrap_or_default();
            print_list(&rows, cli.format);
        }
        EventsAction::Analysis { id } => {
            let data = cli
                .client()
                .get(&format!("/api/events/{id}/analysis"))
                .await?;
            print_item(&data, cli.format);
        }
    }
    Ok(())
}
