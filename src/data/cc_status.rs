//! C&C status repository for the tracked-thread cache.
//!
//! Each row holds the last observed stage and progress of one forum thread. Rows are
//! upserted when a thread changes and deleted once the thread is done or leaves the
//! monitored subforums.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::cc_status::{TrackedStatus, UpsertCcStatusParam};

/// Repository providing database operations for tracked C&C statuses.
pub struct CcStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CcStatusRepository<'a> {
    /// Creates a new CcStatusRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CcStatusRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tracked status.
    ///
    /// # Returns
    /// - `Ok(Vec<TrackedStatus>)` - All tracked rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<TrackedStatus>, DbErr> {
        let entities = entity::prelude::CcStatus::find().all(self.db).await?;

        Ok(entities.into_iter().map(TrackedStatus::from_entity).collect())
    }

    /// Inserts or updates tracked statuses keyed by thread id.
    ///
    /// # Arguments
    /// - `params` - Statuses to write; an empty list is a no-op
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_many(&self, params: Vec<UpsertCcStatusParam>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let models = params
            .into_iter()
            .map(|param| entity::cc_status::ActiveModel {
                thread_id: ActiveValue::Set(param.thread_id),
                stage: ActiveValue::Set(param.stage.as_str().to_string()),
                progress: ActiveValue::Set(param.progress),
            });

        entity::prelude::CcStatus::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::cc_status::Column::ThreadId)
                    .update_columns([
                        entity::cc_status::Column::Stage,
                        entity::cc_status::Column::Progress,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Deletes the tracked statuses of the given threads.
    ///
    /// # Arguments
    /// - `thread_ids` - Thread ids to delete; an empty list is a no-op
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, thread_ids: &[i64]) -> Result<u64, DbErr> {
        if thread_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CcStatus::delete_many()
            .filter(entity::cc_status::Column::ThreadId.is_in(thread_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every tracked status.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::CcStatus::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
