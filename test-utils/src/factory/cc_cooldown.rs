//! Cooldown factory for creating `cc_cooldown` rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a cooldown row for a channel and identifier.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_id` - Discord channel id as string
/// - `identifier` - Alert identifier, e.g. `"cc-svou"`
/// - `date` - Time of the last alert
///
/// # Returns
/// - `Ok(entity::cc_cooldown::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cooldown(
    db: &DatabaseConnection,
    channel_id: &str,
    identifier: &str,
    date: DateTime<Utc>,
) -> Result<entity::cc_cooldown::Model, DbErr> {
    entity::cc_cooldown::ActiveModel {
        channel_id: ActiveValue::Set(channel_id.to_string()),
        identifier: ActiveValue::Set(identifier.to_string()),
        date: ActiveValue::Set(date),
    }
    .insert(db)
    .await
}
