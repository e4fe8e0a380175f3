//! Cron scheduler driving the attendance check.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use tickwatch_core::config::ScheduleConfig;
use tickwatch_core::error::AppError;

use crate::runner::TickRunner;

/// Cron-based scheduler for the attendance check.
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new() -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self { scheduler })
    }

    /// Register the attendance check under the configured cron expression.
    /// Expressions are evaluated in UTC.
    pub async fn register_attendance_check(
        &self,
        runner: Arc<TickRunner>,
        schedule: &ScheduleConfig,
    ) -> Result<(), AppError> {
        let job = attendance_job(runner, &schedule.cron)?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::scheduler(format!("Failed to add attendance_check schedule: {}", e))
        })?;

        tracing::info!("Registered: attendance_check ({})", schedule.cron);
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::scheduler(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }
}

/// Build the cron job that ticks `runner`.
fn attendance_job(runner: Arc<TickRunner>, cron: &str) -> Result<CronJob, AppError> {
    CronJob::new_async(cron, move |_uuid, _lock| {
        let runner = Arc::clone(&runner);
        Box::pin(async move {
            tracing::debug!("Running scheduled attendance check");
            runner.tick().await;
        })
    })
    .map_err(|e| {
        AppError::scheduler(format!(
            "Invalid cron expression '{}' for attendance_check: {}",
            cron, e
        ))
    })
}
