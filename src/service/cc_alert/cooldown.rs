//! In-memory mirror of the persisted alert cooldowns.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::{data::cc_cooldown::CcCooldownRepository, error::AppError};

/// Cooldown identifier of a tier within a generation, e.g. `cc-svou`.
pub fn identifier(gen: &str, tier: &str) -> String {
    format!("cc-{}{}", gen, tier).to_lowercase()
}

/// Last alert time per `(channel_id, identifier)`.
///
/// Cloning shares the underlying map. Writers persist through
/// `CcCooldownRepository` first and record here only once the row is stored.
#[derive(Debug, Clone, Default)]
pub struct CooldownCache {
    entries: Arc<RwLock<HashMap<(u64, String), DateTime<Utc>>>>,
}

impl CooldownCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mirror from the persisted cooldown table.
    pub async fn load(db: &DatabaseConnection) -> Result<Self, AppError> {
        let cache = Self::new();
        cache.reload(db).await?;
        Ok(cache)
    }

    /// Replaces the mirror's contents with the persisted cooldown table.
    ///
    /// Entries recorded between the read and the write are lost, so callers outside
    /// startup hold the sync lock.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of cooldowns loaded
    /// - `Err(AppError)` - Database error or an invalid stored channel id
    pub async fn reload(&self, db: &DatabaseConnection) -> Result<usize, AppError> {
        let rows = CcCooldownRepository::new(db).get_all().await?;
        let loaded: HashMap<(u64, String), DateTime<Utc>> = rows
            .into_iter()
            .map(|row| ((row.channel_id, row.identifier), row.date))
            .collect();
        let count = loaded.len();

        *self.entries.write().await = loaded;

        Ok(count)
    }

    /// Whether an alert to `channel_id` for `identifier` is still inside its cooldown.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel id
    /// - `identifier` - Alert identifier
    /// - `cooldown_hours` - Cooldown of the subscription; 0 never cools down
    /// - `now` - Current time
    pub async fn is_cooling_down(
        &self,
        channel_id: u64,
        identifier: &str,
        cooldown_hours: u32,
        now: DateTime<Utc>,
    ) -> bool {
        if cooldown_hours == 0 {
            return false;
        }

        let entries = self.entries.read().await;
        entries
            .get(&(channel_id, identifier.to_string()))
            .is_some_and(|last| now < *last + Duration::hours(i64::from(cooldown_hours)))
    }

    pub async fn record(&self, channel_id: u64, identifier: &str, date: DateTime<Utc>) {
        self.entries
            .write()
            .await
            .insert((channel_id, identifier.to_string()), date);
    }

    /// Forgets every cooldown of a deleted channel.
    pub async fn remove_channel(&self, channel_id: u64) {
        self.entries
            .write()
            .await
            .retain(|(channel, _), _| *channel != channel_id);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
