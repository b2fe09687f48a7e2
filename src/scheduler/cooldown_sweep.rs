use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::{cc_cooldown::CcCooldownRepository, cc_subscription::CcSubscriptionRepository},
    error::{handler::log_error, AppError},
    scheduler::lockout::SyncLock,
    service::cc_alert::cooldown::CooldownCache,
};

/// Starts the cooldown sweep scheduler
///
/// This scheduler runs at the top of every hour and deletes persisted cooldowns
/// older than the longest cooldown of any subscription, then reloads the in-memory
/// mirror from the table. The sweep shares the C&C sync lock, so it never reloads
/// the mirror while a cycle is recording cooldowns; a sweep that finds the lock held
/// waits for the next hour.
///
/// # Arguments
/// - `db`: Bot database connection
/// - `cooldowns`: Cooldown mirror shared with the alert dispatcher
/// - `lock`: Lock held by poll cycles and the admin resync
///
/// # Returns
/// - `Ok(JobScheduler)`: The running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)`: The job could not be created or started
pub async fn start_scheduler(
    db: DatabaseConnection,
    cooldowns: CooldownCache,
    lock: SyncLock,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let cooldowns = cooldowns.clone();
        let lock = lock.clone();

        Box::pin(async move {
            if let Err(e) = sweep_cooldowns(&db, &cooldowns, &lock).await {
                log_error("Error sweeping C&C cooldowns", &e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cooldown sweep scheduler started");

    Ok(scheduler)
}

/// Deletes expired cooldowns and refreshes the mirror.
///
/// # Returns
/// - `Ok(Some(u64))`: Number of persisted cooldowns deleted
/// - `Ok(None)`: A sync holds the lock; nothing was swept
/// - `Err(AppError)`: Database error or an invalid stored id
pub async fn sweep_cooldowns(
    db: &DatabaseConnection,
    cooldowns: &CooldownCache,
    lock: &SyncLock,
) -> Result<Option<u64>, AppError> {
    let Some(_guard) = lock.try_acquire() else {
        tracing::debug!("C&C sync running, skipping cooldown sweep");
        return Ok(None);
    };

    let longest = CcSubscriptionRepository::new(db)
        .get_all()
        .await?
        .iter()
        .map(|sub| sub.cooldown)
        .max()
        .unwrap_or(0);
    let cutoff = Utc::now() - Duration::hours(i64::from(longest));

    let deleted = CcCooldownRepository::new(db).delete_older_than(cutoff).await?;
    let remaining = cooldowns.reload(db).await?;

    tracing::debug!(
        "Swept {} expired cooldowns, {} still active",
        deleted,
        remaining
    );

    Ok(Some(deleted))
}
