//! Cache store for tracked C&C thread states.
//!
//! Owns the `cc_status` rows and the poll timestamp for a topic. The diff engine and
//! the sync service only touch the cache through this type.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{cc_status::CcStatusRepository, cc_timestamp::CcTimestampRepository},
    error::AppError,
    model::{
        cc_status::{TrackedStatus, UpsertCcStatusParam},
        forum_thread::ParsedThreadData,
        stage::Stage,
    },
};

/// Cache contents read at the start of a cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheSnapshot {
    pub tracked_threads: Vec<TrackedStatus>,
    /// `None` until the topic has completed its first poll.
    pub last_check_time: Option<DateTime<Utc>>,
}

/// Row counts written by [`CacheStore::upsert`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheWrite {
    pub stored: u64,
    pub deleted: u64,
}

pub struct CacheStore<'a> {
    db: &'a DatabaseConnection,
    topic: &'a str,
}

impl<'a> CacheStore<'a> {
    /// Creates a new CacheStore for a topic.
    ///
    /// # Arguments
    /// - `db` - Bot database connection
    /// - `topic` - Key of the poll timestamp row, e.g. `"cc"`
    pub fn new(db: &'a DatabaseConnection, topic: &'a str) -> Self {
        Self { db, topic }
    }

    /// Reads every tracked status and the last check time.
    pub async fn load(&self) -> Result<CacheSnapshot, AppError> {
        let tracked_threads = CcStatusRepository::new(self.db).get_all().await?;
        let last_check_time = CcTimestampRepository::new(self.db)
            .get_last_check(self.topic)
            .await?;

        Ok(CacheSnapshot {
            tracked_threads,
            last_check_time,
        })
    }

    /// Writes changed threads to the cache.
    ///
    /// Threads that reached `Done` are deleted instead of stored.
    ///
    /// # Arguments
    /// - `changed` - Threads whose state moved this cycle
    ///
    /// # Returns
    /// - `Ok(CacheWrite)` - Number of rows stored and deleted
    /// - `Err(AppError::DbErr)` - Database error during the write
    pub async fn upsert(&self, changed: &[ParsedThreadData]) -> Result<CacheWrite, AppError> {
        let repo = CcStatusRepository::new(self.db);

        let (done, active): (Vec<&ParsedThreadData>, Vec<&ParsedThreadData>) = changed
            .iter()
            .partition(|thread| thread.stage == Stage::Done);

        let done_ids: Vec<i64> = done.iter().map(|thread| thread.thread_id).collect();
        let deleted = repo.delete_many(&done_ids).await?;

        let params: Vec<UpsertCcStatusParam> = active
            .into_iter()
            .map(UpsertCcStatusParam::from)
            .collect();
        let stored = repo.upsert_many(params).await?;

        Ok(CacheWrite { stored, deleted })
    }

    /// Deletes tracked rows for threads that left the monitored subforums.
    pub async fn prune(&self, thread_ids: &[i64]) -> Result<u64, AppError> {
        Ok(CcStatusRepository::new(self.db).delete_many(thread_ids).await?)
    }

    /// Deletes every tracked row.
    pub async fn clear(&self) -> Result<u64, AppError> {
        Ok(CcStatusRepository::new(self.db).delete_all().await?)
    }

    /// Records the start time of the most recent successful poll.
    pub async fn update_last_check_time(&self, time: DateTime<Utc>) -> Result<(), AppError> {
        CcTimestampRepository::new(self.db)
            .set_last_check(self.topic, time)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use entity::prelude::*;
    use test_utils::{builder::TestBuilder, factory};

    fn parsed(thread_id: i64, stage: Stage, progress: &str) -> ParsedThreadData {
        ParsedThreadData {
            thread_id,
            node_id: 758,
            title: format!("Thread {}", thread_id),
            phrase_text: None,
            gen: vec!["sv".to_string()],
            tier: vec!["OU".to_string()],
            stage,
            progress: progress.to_string(),
        }
    }

    /// Tests that upserted threads read back with the same stage and progress.
    ///
    /// Expected: Ok with both rows present after reload
    #[tokio::test]
    async fn upsert_then_load_round_trips() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let store = CacheStore::new(db, "cc");

        store
            .upsert(&[parsed(1, Stage::Qc, "1/2"), parsed(2, Stage::Gp, "0/?")])
            .await?;
        let mut snapshot = store.load().await?;
        snapshot.tracked_threads.sort_by_key(|t| t.thread_id);

        assert_eq!(snapshot.tracked_threads.len(), 2);
        assert_eq!(snapshot.tracked_threads[0].stage, Stage::Qc);
        assert_eq!(snapshot.tracked_threads[0].progress, "1/2");
        assert_eq!(snapshot.tracked_threads[1].stage, Stage::Gp);
        assert_eq!(snapshot.tracked_threads[1].progress, "0/?");
        assert_eq!(snapshot.last_check_time, None);

        Ok(())
    }

    /// Tests that a thread reaching Done is deleted rather than stored.
    ///
    /// Expected: Ok with the existing row removed and no Done row written
    #[tokio::test]
    async fn done_threads_are_deleted() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(CcStatus)
            .with_table(CcTimestamp)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_status(db, 5).await?;
        let store = CacheStore::new(db, "cc");

        let write = store
            .upsert(&[parsed(5, Stage::Done, ""), parsed(6, Stage::Done, "")])
            .await?;
        let snapshot = store.load().await?;

        assert_eq!(write.stored, 0);
        assert_eq!(write.deleted, 1);
        assert!(snapshot.tracked_threads.is_empty());

        Ok(())
    }

    /// Tests that pruning only removes the given threads.
    ///
    /// Expected: Ok with one remaining row
    #[tokio::test]
    async fn prune_removes_listed_threads() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_status(db, 1).await?;
        factory::create_status(db, 2).await?;
        let store = CacheStore::new(db, "cc");

        let pruned = store.prune(&[2, 3]).await?;
        let snapshot = store.load().await?;

        assert_eq!(pruned, 1);
        assert_eq!(snapshot.tracked_threads.len(), 1);
        assert_eq!(snapshot.tracked_threads[0].thread_id, 1);

        Ok(())
    }

    /// Tests that the last check time is stored per topic.
    ///
    /// Expected: Ok with the stored time returned for "cc" only
    #[tokio::test]
    async fn stores_last_check_time() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let time = Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap();

        CacheStore::new(db, "cc").update_last_check_time(time).await?;

        assert_eq!(CacheStore::new(db, "cc").load().await?.last_check_time, Some(time));
        assert_eq!(CacheStore::new(db, "ca").load().await?.last_check_time, None);

        Ok(())
    }
}
