use rand::Rng;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    error::handler::log_error,
    service::cc_sync::{CcSyncService, CycleOutcome},
};

/// Starts the C&C poll loop
///
/// The loop waits `interval` plus a random jitter of up to `jitter`, runs one cycle to
/// completion and only then schedules the next, so cycles never overlap even when
/// the forum is slow. Cycle errors are logged and retried on the next tick.
///
/// Cancelling `shutdown` stops the loop while it is waiting; a running cycle is
/// always allowed to finish.
///
/// # Arguments
/// - `service`: Sync service shared with the admin resync
/// - `interval`: Fixed delay between the end of one cycle and the start of the next
/// - `jitter`: Upper bound of the random delay added to each wait
/// - `shutdown`: Token cancelled on process shutdown
pub fn start_scheduler(
    service: CcSyncService,
    interval: Duration,
    jitter: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tracing::info!(
        "C&C sync scheduler started (every {}s, jitter up to {}s)",
        interval.as_secs(),
        jitter.as_secs()
    );

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(next_delay(interval, jitter)) => {}
            }

            match service.run_cycle().await {
                Ok(CycleOutcome::Completed(report)) => {
                    tracing::debug!("C&C cycle report: {:?}", report);
                }
                Ok(CycleOutcome::Skipped) => {}
                Err(e) => log_error("C&C sync cycle failed", &e),
            }
        }

        tracing::info!("C&C sync scheduler stopped");
    })
}

/// Wait before the next cycle: the interval plus up to `jitter` of random delay.
fn next_delay(interval: Duration, jitter: Duration) -> Duration {
    let jitter_ms = u64::try_from(jitter.as_millis()).unwrap_or(u64::MAX);
    if jitter_ms == 0 {
        return interval;
    }

    interval + Duration::from_millis(rand::rng().random_range(0..=jitter_ms))
}
