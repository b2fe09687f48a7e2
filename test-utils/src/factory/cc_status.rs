//! Tracked status factory for creating `cc_status` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture::cc_status::{DEFAULT_PROGRESS, DEFAULT_STAGE};

/// Factory for creating tracked statuses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let status = CcStatusFactory::new(&db, 42)
///     .stage("GP")
///     .progress("0/?")
///     .build()
///     .await?;
/// ```
pub struct CcStatusFactory<'a> {
    db: &'a DatabaseConnection,
    thread_id: i64,
    stage: String,
    progress: String,
}

impl<'a> CcStatusFactory<'a> {
    /// Creates a new CcStatusFactory with default values.
    ///
    /// Defaults:
    /// - stage: `"QC"`
    /// - progress: `"0/2"`
    pub fn new(db: &'a DatabaseConnection, thread_id: i64) -> Self {
        Self {
            db,
            thread_id,
            stage: DEFAULT_STAGE.to_string(),
            progress: DEFAULT_PROGRESS.to_string(),
        }
    }

    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    pub fn progress(mut self, progress: impl Into<String>) -> Self {
        self.progress = progress.into();
        self
    }

    /// Builds and inserts the status row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cc_status::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cc_status::Model, DbErr> {
        entity::cc_status::ActiveModel {
            thread_id: ActiveValue::Set(self.thread_id),
            stage: ActiveValue::Set(self.stage),
            progress: ActiveValue::Set(self.progress),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tracked status with default values.
///
/// Shorthand for `CcStatusFactory::new(db, thread_id).build().await`.
pub async fn create_status(
    db: &DatabaseConnection,
    thread_id: i64,
) -> Result<entity::cc_status::Model, DbErr> {
    CcStatusFactory::new(db, thread_id).build().await
}
