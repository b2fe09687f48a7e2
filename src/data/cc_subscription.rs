//! C&C alert subscription repository.
//!
//! Subscriptions are managed through the bot's slash commands; the pipeline only
//! reads them, and the gateway handlers clean them up when channels or guilds go away.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{error::AppError, model::cc_subscription::AlertSubscription};

/// Repository providing database operations for alert subscriptions.
pub struct CcSubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CcSubscriptionRepository<'a> {
    /// Creates a new CcSubscriptionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CcSubscriptionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every subscription in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<AlertSubscription>)` - All subscription rows
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A row holds an invalid Discord id
    pub async fn get_all(&self) -> Result<Vec<AlertSubscription>, AppError> {
        let entities = entity::prelude::CcAlertChans::find()
            .order_by_asc(entity::cc_alert_chans::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(AlertSubscription::from_entity)
            .collect()
    }

    /// Deletes all subscriptions of a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_channel(&self, channel_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::CcAlertChans::delete_many()
            .filter(entity::cc_alert_chans::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes all subscriptions of a guild.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_server(&self, server_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::CcAlertChans::delete_many()
            .filter(entity::cc_alert_chans::Column::ServerId.eq(server_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
