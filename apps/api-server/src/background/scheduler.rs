//! Cron-style job scheduler using tokio-cron-scheduler.

use std::sync::Arc;

use chrono::Utc;
use papyr_core::ports::TokenRepository;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    /// Six-field cron expression (seconds first) for the expired-token sweep.
    pub token_sweep: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token_sweep: "0 0 * * * *".to_string(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("SCHEDULER_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.enabled),
            token_sweep: std::env::var("TOKEN_SWEEP_SCHEDULE").unwrap_or(defaults.token_sweep),
        }
    }
}

/// Periodic maintenance jobs.
pub struct Scheduler {
    inner: JobScheduler,
}

impl Scheduler {
    /// Purge expired tokens on `schedule`.
    async fn token_sweep(
        &self,
        schedule: &str,
        tokens: Arc<dyn TokenRepository>,
    ) -> Result<(), JobSchedulerError> {
        let job = Job::new_async(schedule, move |_uuid, _lock| {
            let tokens = tokens.clone();
            Box::pin(async move { sweep_expired_tokens(tokens.as_ref()).await })
        })?;

        let id = self.inner.add(job).await?;
        tracing::info!(schedule, job_id = %id, "Token sweep registered");
        Ok(())
    }

    pub async fn shutdown(&mut self) -> Result<(), JobSchedulerError> {
        self.inner.shutdown().await?;
        tracing::info!("Scheduler stopped");
        Ok(())
    }
}

/// Register the periodic jobs and, unless disabled, start them.
pub async fn start_background_jobs(
    config: SchedulerConfig,
    tokens: Arc<dyn TokenRepository>,
) -> Result<Scheduler, JobSchedulerError> {
    let scheduler = Scheduler {
        inner: JobScheduler::new().await?,
    };
    scheduler.token_sweep(&config.token_sweep, tokens).await?;

    if config.enabled {
        scheduler.inner.start().await?;
        tracing::info!("Scheduler started");
    } else {
        tracing::info!("Scheduler disabled");
    }

    Ok(scheduler)
}

async fn sweep_expired_tokens(tokens: &dyn TokenRepository) {
    match tokens.delete_expired(Utc::now()).await {
        Ok(0) => tracing::debug!("No expired tokens"),
        Ok(removed) => tracing::info!(removed, "Expired tokens purged"),
        Err(e) => tracing::error!(error = %e, "Token sweep failed"),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use papyr_infra::PostgresTokenRepository;

    use super::*;

    #[tokio::test]
    async fn test_sweep_deletes_expired_tokens() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        sweep_expired_tokens(&PostgresTokenRepository::new(db.clone())).await;

        let log: Vec<String> = db
            .into_transaction_log()
            .iter()
            .map(|t| format!("{t:?}"))
            .collect();
        assert_eq!(log.len(), 1);
        assert!(log[0].contains(r#"DELETE FROM \"tokens\""#));
    }
}
