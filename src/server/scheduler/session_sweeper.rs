use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::session::SessionService, state::AppState};

/// Starts the expired-session sweeper.
///
/// Every `interval` the job deletes session rows whose `expires_at` has passed. Expired rows
/// are already refused by validation; the sweep only reclaims storage. The returned
/// scheduler must be shut down by the caller to stop the job.
///
/// # Arguments
/// - `state`: Application state providing the database and token signer
/// - `interval`: Time between sweeps
pub async fn start_scheduler(
    state: AppState,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            match SessionService::new(&state.db, &state.tokens)
                .sweep_expired()
                .await
            {
                Ok(0) => {}
                Ok(removed) => tracing::info!("Swept {} expired sessions", removed),
                Err(e) => tracing::error!("Error sweeping expired sessions: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session sweeper started, running every {:?}", interval);

    Ok(scheduler)
}
