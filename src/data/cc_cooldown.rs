//! Alert cooldown repository.
//!
//! Persists the time of the last cooldown-gated alert per channel and identifier so
//! that cooldowns survive restarts. The in-memory mirror in the alert service is
//! loaded from here at startup.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::cc_cooldown::AlertCooldown};

/// Repository providing database operations for alert cooldowns.
pub struct CcCooldownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CcCooldownRepository<'a> {
    /// Creates a new CcCooldownRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CcCooldownRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored cooldown.
    ///
    /// # Returns
    /// - `Ok(Vec<AlertCooldown>)` - All cooldown rows
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A row holds an invalid channel id
    pub async fn get_all(&self) -> Result<Vec<AlertCooldown>, AppError> {
        let entities = entity::prelude::CcCooldown::find().all(self.db).await?;

        entities.into_iter().map(AlertCooldown::from_entity).collect()
    }

    /// Records the time of an alert for a channel and identifier.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel the alert was sent to
    /// - `identifier` - Alert identifier
    /// - `date` - Time the alert was sent
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted or updated
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        channel_id: u64,
        identifier: &str,
        date: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::CcCooldown::insert(entity::cc_cooldown::ActiveModel {
            channel_id: ActiveValue::Set(channel_id.to_string()),
            identifier: ActiveValue::Set(identifier.to_string()),
            date: ActiveValue::Set(date),
        })
        .on_conflict(
            OnConflict::columns([
                entity::cc_cooldown::Column::ChannelId,
                entity::cc_cooldown::Column::Identifier,
            ])
            .update_column(entity::cc_cooldown::Column::Date)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes cooldowns recorded before a cutoff.
    ///
    /// # Arguments
    /// - `cutoff` - Rows with a date strictly before this are deleted
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::CcCooldown::delete_many()
            .filter(entity::cc_cooldown::Column::Date.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes all cooldowns of a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_channel(&self, channel_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::CcCooldown::delete_many()
            .filter(entity::cc_cooldown::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
