//! Subscription factory for creating `cc_alert_chans` rows.

use crate::{factory::helpers::next_id, fixture::cc_alert_chans as defaults};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating alert subscriptions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let subscription = SubscriptionFactory::new(&db)
///     .channel_id("1234")
///     .tier("UU")
///     .role(Some("5678".to_string()))
///     .build()
///     .await?;
/// ```
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    channel_id: String,
    tier: String,
    role: Option<String>,
    gen: String,
    stage: String,
    cooldown: i32,
    prefix: Option<String>,
}

impl<'a> SubscriptionFactory<'a> {
    /// Creates a new SubscriptionFactory with default values.
    ///
    /// Defaults:
    /// - server_id: `"1"`
    /// - channel_id: unique auto-incremented id
    /// - tier: `"OU"`, gen: `"sv"`, stage: `"all"`
    /// - role: `None`, cooldown: `0`, prefix: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: defaults::DEFAULT_SERVER_ID.to_string(),
            channel_id: (1_000_000 + next_id()).to_string(),
            tier: defaults::DEFAULT_TIER.to_string(),
            role: None,
            gen: defaults::DEFAULT_GEN.to_string(),
            stage: defaults::DEFAULT_STAGE.to_string(),
            cooldown: 0,
            prefix: None,
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = tier.into();
        self
    }

    pub fn role(mut self, role: Option<String>) -> Self {
        self.role = role;
        self
    }

    pub fn gen(mut self, gen: impl Into<String>) -> Self {
        self.gen = gen.into();
        self
    }

    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    pub fn cooldown(mut self, cooldown: i32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Builds and inserts the subscription row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cc_alert_chans::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cc_alert_chans::Model, DbErr> {
        entity::cc_alert_chans::ActiveModel {
            id: ActiveValue::NotSet,
            server_id: ActiveValue::Set(self.server_id),
            channel_id: ActiveValue::Set(self.channel_id),
            tier: ActiveValue::Set(self.tier),
            role: ActiveValue::Set(self.role),
            gen: ActiveValue::Set(self.gen),
            stage: ActiveValue::Set(self.stage),
            cooldown: ActiveValue::Set(self.cooldown),
            prefix: ActiveValue::Set(self.prefix),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscription with default values.
///
/// Shorthand for `SubscriptionFactory::new(db).build().await`.
pub async fn create_subscription(
    db: &DatabaseConnection,
) -> Result<entity::cc_alert_chans::Model, DbErr> {
    SubscriptionFactory::new(db).build().await
}
