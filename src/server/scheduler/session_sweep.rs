//! Periodic garbage collection of expired session rows.

use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::error::AppError;

/// Starts the hourly session sweep.
///
/// Deletes session rows past their expiry. This is maintenance only: the
/// session store re-checks expiry on every load, so a row outliving the
/// sweep cadence never authenticates a request.
///
/// # Arguments
/// - `store` - Session store backing the cookie layer
pub async fn start_scheduler(store: SqliteStore) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Run at the top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            if let Err(e) = store.delete_expired().await {
                tracing::error!("Error sweeping expired sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session sweep scheduler started");

    Ok(())
}
