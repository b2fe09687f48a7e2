//! Subscription housekeeping for channels and guilds the bot can no longer reach.

use sea_orm::DatabaseConnection;

use crate::{
    data::{cc_cooldown::CcCooldownRepository, cc_subscription::CcSubscriptionRepository},
    error::AppError,
    service::cc_alert::cooldown::CooldownCache,
};

pub struct CcSubscriptionService<'a> {
    db: &'a DatabaseConnection,
    cooldowns: &'a CooldownCache,
}

impl<'a> CcSubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection, cooldowns: &'a CooldownCache) -> Self {
        Self { db, cooldowns }
    }

    /// Removes the subscriptions and cooldowns of a deleted channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel id
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of subscriptions removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn remove_channel(&self, channel_id: u64) -> Result<u64, AppError> {
        let removed = CcSubscriptionRepository::new(self.db)
            .delete_by_channel(channel_id)
            .await?;
        CcCooldownRepository::new(self.db)
            .delete_by_channel(channel_id)
            .await?;
        self.cooldowns.remove_channel(channel_id).await;

        Ok(removed)
    }

    /// Removes every subscription of a guild the bot left.
    ///
    /// Cooldown rows of the guild's channels are left to the hourly sweep.
    pub async fn remove_server(&self, server_id: u64) -> Result<u64, AppError> {
        Ok(CcSubscriptionRepository::new(self.db)
            .delete_by_server(server_id)
            .await?)
    }
}
