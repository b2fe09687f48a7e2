use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct CcTimestampRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CcTimestampRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the time of the last successful poll for a topic
    ///
    /// # Returns
    /// - `Ok(Some(DateTime))`: The stored check time
    /// - `Ok(None)`: The topic has never been polled
    /// - `Err(DbErr)`: Database error
    pub async fn get_last_check(&self, topic: &str) -> Result<Option<DateTime<Utc>>, DbErr> {
        let entity = entity::prelude::CcTimestamp::find_by_id(topic.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.lastcheck))
    }

    /// Stores the time of the last successful poll for a topic
    ///
    /// # Returns
    /// - `Ok(())`: Timestamp stored
    /// - `Err(DbErr)`: Database error
    pub async fn set_last_check(&self, topic: &str, lastcheck: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::CcTimestamp::insert(entity::cc_timestamp::ActiveModel {
            topic: ActiveValue::Set(topic.to_string()),
            lastcheck: ActiveValue::Set(lastcheck),
        })
        .on_conflict(
            OnConflict::column(entity::cc_timestamp::Column::Topic)
                .update_column(entity::cc_timestamp::Column::Lastcheck)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
