//! Manual alert scan command.

use crate::output::{print_item, print_success};

use super::Cli;

/// Execute the scan command: run one alert sweep now.
pub async fn execute(cli: &Cli) -> anyhow::Result<()> {
    let client = cli.admin_client().await?;
    let summary = client.post("/api/admin/scan", None).await?;

    let sent = summary["alerts_sent"].as_u64().unwrap_or(0);
    let scanned = summary["users_scanned"].as_u64().unwrap_or(0);
    print_success(&format!("Scan complete: {sent} alerts across {scanned} users"));
    if sent > 0 {
        print_item(&summary["fired"], cli.format);
    }
    Ok(())
}
