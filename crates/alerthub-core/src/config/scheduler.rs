//! Scheduled task configuration.

use serde::{Deserialize, Serialize};

/// Configuration for periodic background tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Whether scheduled tasks run at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the alert scan (feed refresh + dispatch).
    #[serde(default = "default_alert_scan_cron")]
    pub alert_scan_cron: String,
    /// Cron expression for the stale pending-update sweep.
    #[serde(default = "default_pending_sweep_cron")]
    pub pending_sweep_cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            alert_scan_cron: default_alert_scan_cron(),
            pending_sweep_cron: default_pending_sweep_cron(),
        }
    }
}

fn default_true() -> bool {
    true
}

// Every five minutes, matching the dashboard refresh cadence.
fn default_alert_scan_cron() -> String {
    "0 */5 * * * *".to_string()
}

// Hourly.
fn default_pending_sweep_cron() -> String {
    "0 0 * * * *".to_string()
}
