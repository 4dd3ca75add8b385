//! Health check command.

use crate::output::print_success;

use super::Cli;

/// Execute the health command.
pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    let data = cli.client().get("/api/health").await?;
    let status = data["status"].as_str().unwrap_or("unknown");
    let version = data["version"].as_str().unwrap_or("unknown");
    print_success(&format!("API is {status} (v{version}) at {}", cli.api_url));
    Ok(())
}
