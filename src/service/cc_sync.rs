//! C&C sync service running one poll cycle end to end.
//!
//! A cycle polls the forum, parses the threads, diffs them against the status cache,
//! writes the cache and only then dispatches alerts, so a failed send never leaves
//! the cache behind the forum. The cycle and the admin resync share a [`SyncLock`];
//! whichever comes second backs off.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc};

use crate::{
    data::{cc_subscription::CcSubscriptionRepository, forum_thread::ForumThreadRepository},
    error::{handler::log_error, AppError},
    model::{cc_status::TrackedStatus, forum_node::ForumNodeMap, forum_thread::ParsedThreadData},
    scheduler::lockout::SyncLock,
    service::{
        cc_alert::{
            cooldown::CooldownCache, sender::AlertSender, CcAlertService, DispatchSummary,
        },
        cc_cache::CacheStore,
        cc_diff::{diff, ThreadDiff},
        cc_parse::parse_threads,
    },
};

/// Timestamp topic of the C&C pipeline.
pub const CC_TOPIC: &str = "cc";

/// Counts describing one cycle or resync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub polled: usize,
    pub changed: usize,
    pub removed: usize,
    pub stored: u64,
    pub deleted: u64,
    /// `None` when no alerts were attempted.
    pub alerts: Option<DispatchSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The lock was held by another sync.
    Skipped,
    Completed(CycleReport),
}

/// Dependencies of the C&C pipeline, cheap to clone into scheduled tasks.
#[derive(Clone)]
pub struct CcSyncService {
    db: DatabaseConnection,
    forum_db: DatabaseConnection,
    sender: Arc<dyn AlertSender>,
    cooldowns: CooldownCache,
    nodes: Arc<ForumNodeMap>,
    forum_base_url: String,
    lock: SyncLock,
}

impl CcSyncService {
    /// Creates a new CcSyncService.
    ///
    /// # Arguments
    /// - `db` - Bot database holding the cache, subscriptions and cooldowns
    /// - `forum_db` - Read-only forum database
    /// - `sender` - Alert delivery
    /// - `cooldowns` - Cooldown mirror loaded at startup
    /// - `nodes` - Monitored subforum map
    /// - `forum_base_url` - Forum root used to build thread links
    pub fn new(
        db: DatabaseConnection,
        forum_db: DatabaseConnection,
        sender: Arc<dyn AlertSender>,
        cooldowns: CooldownCache,
        nodes: Arc<ForumNodeMap>,
        forum_base_url: String,
    ) -> Self {
        Self {
            db,
            forum_db,
            sender,
            cooldowns,
            nodes,
            forum_base_url,
            lock: SyncLock::new(),
        }
    }

    pub fn lock(&self) -> &SyncLock {
        &self.lock
    }

    /// Runs one poll cycle unless another sync holds the lock.
    ///
    /// The first cycle of a fresh database only seeds the cache; otherwise every
    /// thread ever posted in the monitored nodes would be announced at once.
    ///
    /// # Returns
    /// - `Ok(CycleOutcome::Skipped)` - Another sync is running
    /// - `Ok(CycleOutcome::Completed)` - Cycle finished; alert failures are logged
    /// - `Err(AppError)` - Forum or cache error; nothing after the failing step ran
    pub async fn run_cycle(&self) -> Result<CycleOutcome, AppError> {
        let Some(_guard) = self.lock.try_acquire() else {
            tracing::debug!("C&C sync already running, skipping cycle");
            return Ok(CycleOutcome::Skipped);
        };

        let cycle_start = Utc::now();
        let store = CacheStore::new(&self.db, CC_TOPIC);
        let snapshot = store.load().await?;

        let Some(since) = snapshot.last_check_time else {
            tracing::info!("No previous C&C check recorded, seeding the cache");
            return self.seed(&store, cycle_start).await.map(CycleOutcome::Completed);
        };

        let tracked_ids: Vec<i64> = snapshot
            .tracked_threads
            .iter()
            .map(|status| status.thread_id)
            .collect();
        let Some(fresh) = self.poll(since, &tracked_ids).await? else {
            return Ok(CycleOutcome::Completed(CycleReport::default()));
        };

        let ThreadDiff { changed, removed } = diff(&fresh, &snapshot.tracked_threads);
        let removed_ids: Vec<i64> = removed.iter().map(|status| status.thread_id).collect();

        let write = store.upsert(&changed).await?;
        store.prune(&removed_ids).await?;
        store.update_last_check_time(cycle_start).await?;

        let mut report = CycleReport {
            polled: fresh.len(),
            changed: changed.len(),
            removed: removed.len(),
            stored: write.stored,
            deleted: write.deleted,
            alerts: None,
        };

        if !changed.is_empty() {
            let previous: HashMap<i64, TrackedStatus> = snapshot
                .tracked_threads
                .into_iter()
                .map(|status| (status.thread_id, status))
                .collect();
            report.alerts = self.alert(&changed, &previous, cycle_start).await?;
        }

        tracing::info!(
            "C&C sync: {} polled, {} changed, {} removed",
            report.polled,
            report.changed,
            report.removed
        );

        Ok(CycleOutcome::Completed(report))
    }

    /// Rebuilds the cache from every thread in the monitored nodes without alerting.
    ///
    /// # Returns
    /// - `Ok(CycleReport)` - Counts of the rebuilt cache
    /// - `Err(AppError::SyncInProgress)` - A poll cycle is running
    /// - `Err(AppError)` - Forum or cache error
    pub async fn resync(&self) -> Result<CycleReport, AppError> {
        let _guard = self.lock.try_acquire().ok_or(AppError::SyncInProgress)?;

        let store = CacheStore::new(&self.db, CC_TOPIC);
        let cleared = store.clear().await?;
        tracing::info!("C&C resync cleared {} tracked threads", cleared);

        self.seed(&store, Utc::now()).await
    }

    /// Stores the state of every monitored thread as-is and records the check time.
    async fn seed(
        &self,
        store: &CacheStore<'_>,
        cycle_start: DateTime<Utc>,
    ) -> Result<CycleReport, AppError> {
        let Some(fresh) = self.poll(DateTime::<Utc>::UNIX_EPOCH, &[]).await? else {
            return Ok(CycleReport::default());
        };

        let write = store.upsert(&fresh).await?;
        store.update_last_check_time(cycle_start).await?;

        tracing::info!(
            "C&C cache seeded: {} threads stored, {} done",
            write.stored,
            write.deleted
        );

        Ok(CycleReport {
            polled: fresh.len(),
            changed: fresh.len(),
            removed: 0,
            stored: write.stored,
            deleted: write.deleted,
            alerts: None,
        })
    }

    /// Polls and parses the monitored nodes.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<ParsedThreadData>))` - Parsed threads
    /// - `Ok(None)` - No nodes are monitored
    /// - `Err(AppError::DbErr)` - Forum database error
    async fn poll(
        &self,
        since: DateTime<Utc>,
        tracked_ids: &[i64],
    ) -> Result<Option<Vec<ParsedThreadData>>, AppError> {
        let node_ids = self.nodes.monitored_ids();
        if node_ids.is_empty() {
            tracing::warn!("No monitored C&C subforums configured");
            return Ok(None);
        }

        let threads = ForumThreadRepository::new(&self.forum_db)
            .poll(&node_ids, since, tracked_ids)
            .await?;

        Ok(Some(parse_threads(&threads, &self.nodes)))
    }

    /// Dispatches alerts, absorbing the mass-update guard.
    async fn alert(
        &self,
        changed: &[ParsedThreadData],
        previous: &HashMap<i64, TrackedStatus>,
        now: DateTime<Utc>,
    ) -> Result<Option<DispatchSummary>, AppError> {
        let subscriptions = CcSubscriptionRepository::new(&self.db).get_all().await?;
        let service = CcAlertService::new(
            &self.db,
            self.sender.as_ref(),
            &self.cooldowns,
            &self.forum_base_url,
        );

        match service
            .dispatch(changed, previous, &subscriptions, now)
            .await
        {
            Ok(summary) => Ok(Some(summary)),
            Err(e @ AppError::MassUpdate { .. }) => {
                log_error("Skipping C&C alerts", &e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{
        builder::TestBuilder,
        context::TestContext,
        factory::{self, cc_subscription::SubscriptionFactory, forum_thread::ForumThreadFactory},
    };

    use crate::{
        data::cc_status::CcStatusRepository, model::stage::Stage,
        service::cc_alert::sender::recording::RecordingSender,
    };

    const QUALITY_CONTROL: i64 = 3;

    struct Harness {
        bot: TestContext,
        forum: TestContext,
        sender: Arc<RecordingSender>,
        service: CcSyncService,
    }

    impl Harness {
        async fn new() -> Self {
            let bot = TestBuilder::new().with_bot_tables().build().await.unwrap();
            let forum = TestBuilder::new().with_forum_tables().build().await.unwrap();
            let sender = Arc::new(RecordingSender::default());

            let service = CcSyncService::new(
                bot.db.clone().unwrap(),
                forum.db.clone().unwrap(),
                sender.clone(),
                CooldownCache::new(),
                Arc::new(ForumNodeMap::default_map()),
                "https://www.smogon.com/forums".to_string(),
            );

            factory::create_prefix(forum.db.as_ref().unwrap(), QUALITY_CONTROL, "Quality Control")
                .await
                .unwrap();

            Self {
                bot,
                forum,
                sender,
                service,
            }
        }

        fn bot_db(&self) -> &DatabaseConnection {
            self.bot.db.as_ref().unwrap()
        }

        fn forum_db(&self) -> &DatabaseConnection {
            self.forum.db.as_ref().unwrap()
        }

        /// Marks the cache as checked an hour ago so the next cycle alerts.
        async fn checked_an_hour_ago(&self) -> Result<(), AppError> {
            CacheStore::new(self.bot_db(), CC_TOPIC)
                .update_last_check_time(Utc::now() - Duration::hours(1))
                .await
        }

        async fn run(&self) -> Result<CycleReport, AppError> {
            match self.service.run_cycle().await? {
                CycleOutcome::Completed(report) => Ok(report),
                CycleOutcome::Skipped => panic!("cycle unexpectedly skipped"),
            }
        }

        async fn tracked(&self) -> Result<Vec<TrackedStatus>, AppError> {
            let mut tracked = CcStatusRepository::new(self.bot_db()).get_all().await?;
            tracked.sort_by_key(|status| status.thread_id);
            Ok(tracked)
        }
    }

    /// Tests the end-to-end cycle for a new thread waiting for QC checks.
    ///
    /// Expected: Ok with the thread cached as QC 0/2 and one "Ready for QC" alert
    #[tokio::test]
    async fn new_qc_thread_is_cached_and_announced() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        ForumThreadFactory::new(h.forum_db(), 42, 758)
            .title("Zapdos [QC 0/2]")
            .prefix_id(QUALITY_CONTROL)
            .build()
            .await?;
        SubscriptionFactory::new(h.bot_db())
            .channel_id("100")
            .build()
            .await?;

        let report = h.run().await?;

        assert_eq!(report.changed, 1);
        assert_eq!(report.alerts.map(|a| a.sent), Some(1));
        let sent = h.sender.sent();
        assert_eq!(sent[0].0, 100);
        assert!(sent[0].1.contains("**Ready for QC!** Zapdos [QC 0/2]"));

        let tracked = h.tracked().await?;
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].thread_id, 42);
        assert_eq!(tracked[0].stage, Stage::Qc);
        assert_eq!(tracked[0].progress, "0/2");

        Ok(())
    }

    /// Tests that an unchanged forum produces nothing on the following cycle.
    ///
    /// Expected: Ok with no changes and no second alert
    #[tokio::test]
    async fn repeated_cycle_is_quiet() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        ForumThreadFactory::new(h.forum_db(), 42, 758)
            .title("Zapdos [QC 0/2]")
            .prefix_id(QUALITY_CONTROL)
            .post_date(Utc::now() - Duration::minutes(5))
            .build()
            .await?;
        factory::create_subscription(h.bot_db()).await?;

        h.run().await?;
        let second = h.run().await?;

        assert_eq!(second.changed, 0);
        assert_eq!(second.alerts, None);
        assert_eq!(h.sender.sent().len(), 1);

        Ok(())
    }

    /// Tests that six threads becoming ready for QC at once are cached but not
    /// announced.
    ///
    /// Expected: Ok with six cached threads and no alerts
    #[tokio::test]
    async fn mass_update_caches_without_alerting() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        for id in 1..=6 {
            ForumThreadFactory::new(h.forum_db(), id, 758)
                .title(format!("Mon {} [QC 0/2]", id))
                .prefix_id(QUALITY_CONTROL)
                .build()
                .await?;
        }
        factory::create_subscription(h.bot_db()).await?;

        let report = h.run().await?;

        assert_eq!(report.changed, 6);
        assert_eq!(report.alerts, None);
        assert!(h.sender.sent().is_empty());
        assert_eq!(h.tracked().await?.len(), 6);

        Ok(())
    }

    /// Tests that a tracked thread missing from the forum is pruned silently.
    ///
    /// Expected: Ok with the row deleted and no alerts
    #[tokio::test]
    async fn vanished_thread_is_pruned() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        factory::create_status(h.bot_db(), 7).await?;
        factory::create_subscription(h.bot_db()).await?;

        let report = h.run().await?;

        assert_eq!(report.removed, 1);
        assert!(h.tracked().await?.is_empty());
        assert!(h.sender.sent().is_empty());

        Ok(())
    }

    /// Tests that a thread moved out of the monitored nodes is pruned.
    ///
    /// Expected: Ok with the row deleted
    #[tokio::test]
    async fn moved_thread_is_pruned() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        factory::create_status(h.bot_db(), 7).await?;
        factory::create_thread(h.forum_db(), 7, 1, "Zapdos [QC 0/2]").await?;

        let report = h.run().await?;

        assert_eq!(report.removed, 1);
        assert!(h.tracked().await?.is_empty());

        Ok(())
    }

    /// Tests that an old tracked thread is re-read even without a new post.
    ///
    /// Expected: Ok with the progress updated and an update alert sent
    #[tokio::test]
    async fn old_tracked_thread_is_rechecked() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        factory::create_status(h.bot_db(), 8).await?;
        ForumThreadFactory::new(h.forum_db(), 8, 758)
            .title("Zapdos [QC 1/2]")
            .prefix_id(QUALITY_CONTROL)
            .post_date(Utc::now() - Duration::days(30))
            .build()
            .await?;
        factory::create_subscription(h.bot_db()).await?;

        let report = h.run().await?;

        assert_eq!(report.changed, 1);
        assert_eq!(h.tracked().await?[0].progress, "1/2");
        assert!(h.sender.sent()[0].1.contains("**Thread updated**"));

        Ok(())
    }

    /// Tests that the first cycle on an empty database seeds the cache silently.
    ///
    /// Expected: Ok with the thread cached, the check time set and no alerts
    #[tokio::test]
    async fn first_cycle_seeds_without_alerts() -> Result<(), AppError> {
        let h = Harness::new().await;
        ForumThreadFactory::new(h.forum_db(), 42, 758)
            .title("Zapdos [QC 0/2]")
            .prefix_id(QUALITY_CONTROL)
            .build()
            .await?;
        factory::create_subscription(h.bot_db()).await?;

        let report = h.run().await?;

        assert_eq!(report.stored, 1);
        assert_eq!(report.alerts, None);
        assert!(h.sender.sent().is_empty());
        let snapshot = CacheStore::new(h.bot_db(), CC_TOPIC).load().await?;
        assert!(snapshot.last_check_time.is_some());
        assert_eq!(snapshot.tracked_threads.len(), 1);

        Ok(())
    }

    /// Tests that the resync rebuilds the cache from the forum without alerting.
    ///
    /// Expected: Ok with the stale row replaced, done threads skipped and no alerts
    #[tokio::test]
    async fn resync_rebuilds_cache() -> Result<(), AppError> {
        let h = Harness::new().await;
        h.checked_an_hour_ago().await?;
        factory::create_status(h.bot_db(), 99).await?;
        factory::create_thread(h.forum_db(), 1, 758, "Zapdos [QC 1/2]").await?;
        factory::create_thread(h.forum_db(), 2, 758, "Moltres [QC 2/2] [GP 1/1]").await?;
        factory::create_subscription(h.bot_db()).await?;

        let report = h.service.resync().await?;

        assert_eq!(report.polled, 2);
        assert_eq!(report.stored, 1);
        let tracked = h.tracked().await?;
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].thread_id, 1);
        assert!(h.sender.sent().is_empty());

        Ok(())
    }

    /// Tests that a held lock skips the cycle and rejects the resync.
    ///
    /// Expected: Skipped cycle and Err(SyncInProgress)
    #[tokio::test]
    async fn held_lock_skips_cycle_and_resync() -> Result<(), AppError> {
        let h = Harness::new().await;
        let _guard = h.service.lock().try_acquire().unwrap();

        assert_eq!(h.service.run_cycle().await?, CycleOutcome::Skipped);
        assert!(matches!(
            h.service.resync().await,
            Err(AppError::SyncInProgress)
        ));

        Ok(())
    }

    /// Tests that the lock is released after a failing cycle.
    ///
    /// Expected: Err from the missing forum tables, then the lock is free
    #[tokio::test]
    async fn lock_released_after_failed_cycle() -> Result<(), AppError> {
        let bot = TestBuilder::new().with_bot_tables().build().await.unwrap();
        let forum = TestBuilder::new().build().await.unwrap();
        let service = CcSyncService::new(
            bot.db.clone().unwrap(),
            forum.db.clone().unwrap(),
            Arc::new(RecordingSender::default()),
            CooldownCache::new(),
            Arc::new(ForumNodeMap::default_map()),
            "https://www.smogon.com/forums".to_string(),
        );

        assert!(service.run_cycle().await.is_err());
        assert!(service.lock().try_acquire().is_some());

        Ok(())
    }
}
