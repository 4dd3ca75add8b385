//! Cron scheduler for periodic tasks.

use std::sync::Arc;

use chrono::Utc;
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use alerthub_core::config::{AuthConfig, SchedulerConfig};
use alerthub_core::error::AppError;
use alerthub_service::AlertService;
use alerthub_store::collections::UsersCollection;

/// Cron-based scheduler for AlertHub's periodic work.
///
/// Each tick of a registered job runs to completion inside its scheduler
/// slot, so a slow feed fetch cannot overlap with the next tick of the
/// same job.
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Scheduling configuration (cron expressions, enable flag)
    config: SchedulerConfig,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new(config: SchedulerConfig) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self { scheduler, config })
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Alert scan — refreshes the feed and dispatches alerts for every
    /// eligible user. Default cadence is every five minutes.
    pub async fn register_alert_scan(&self, alerts: Arc<AlertService>) -> Result<(), AppError> {
        let cron = self.config.alert_scan_cron.clone();
        let job = CronJob::new_async(cron.as_str(), move |_uuid, _lock| {
            let alerts = Arc::clone(&alerts);
            Box::pin(async move {
                tracing::debug!("Running scheduled alert scan");
                match alerts.scan_all().await {
                    Ok(summary) if summary.alerts_sent > 0 => {
                        tracing::info!(
                            alerts_sent = summary.alerts_sent,
                            users_scanned = summary.users_scanned,
                            "Scheduled alert scan dispatched alerts"
                        );
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!("Scheduled alert scan failed: {}", e);
                    }
                }
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create alert_scan schedule: {}", e)))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add alert_scan schedule: {}", e)))?;

        tracing::info!(cron = %self.config.alert_scan_cron, "Registered: alert_scan");
        Ok(())
    }

    /// Stale pending-update sweep — hourly by default.
    ///
    /// Pending records past the confirmation TTL are already rejected at
    /// confirm time; the sweep only reports them so operators can see
    /// abandoned changes. It never deletes, keeping the records
    /// inspectable.
    pub async fn register_pending_sweep(
        &self,
        users: Arc<UsersCollection>,
        auth: &AuthConfig,
    ) -> Result<(), AppError> {
        let cron = self.config.pending_sweep_cron.clone();
        let ttl_hours = auth.pending_update_ttl_hours;
        let job = CronJob::new_async(cron.as_str(), move |_uuid, _lock| {
            let users = Arc::clone(&users);
            Box::pin(async move {
                tracing::debug!("Running stale pending-update sweep");
                let all = match users.list().await {
                    Ok(all) => all,
                    Err(e) => {
                        tracing::error!("Pending sweep could not list users: {}", e);
                        return;
                    }
                };

                for user in all {
                    let Some(pending) = user.pending_update.as_ref() else {
                        continue;
                    };
                    if pending.is_stale(ttl_hours) {
                        let age_hours = (Utc::now() - pending.requested_at).num_hours();
                        tracing::warn!(
                            user_id = %user.id,
                            username = %user.username,
                            age_hours,
                            "Stale pending update past its confirmation window"
                        );
                    }
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create pending_sweep schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add pending_sweep schedule: {}", e))
        })?;

        tracing::info!(cron = %self.config.pending_sweep_cron, "Registered: pending_sweep");
        Ok(())
    }
}
