//! Domain models for C&C alert channel subscriptions.

use crate::{
    error::AppError,
    model::stage::Stage,
    util::parse::{parse_optional_u64_from_string, parse_u64_from_string},
};

/// Stage value meaning "any stage" in a subscription row.
pub const ANY_STAGE: &str = "all";

/// A channel's subscription to C&C alerts for one tier and generation.
///
/// A channel may have several rows for the same tier and generation, one per stage,
/// each naming a different role to ping.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSubscription {
    pub id: i32,
    /// Discord guild owning the channel.
    pub server_id: u64,
    /// Discord channel receiving alerts.
    pub channel_id: u64,
    /// Tier label, compared case-insensitively.
    pub tier: String,
    /// Role mentioned with the alert, if any.
    pub role: Option<u64>,
    /// Canonical generation id such as "sv".
    pub gen: String,
    /// Stage label the role is meant for, or `"all"`.
    pub stage: String,
    /// Minimum hours between QC alerts for the same identifier; 0 disables.
    pub cooldown: u32,
    /// Alternate tier label matched in addition to `tier`.
    pub prefix: Option<String>,
}

impl AlertSubscription {
    /// Converts an entity model to a subscription at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(AlertSubscription)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored Discord id is not a valid u64
    pub fn from_entity(entity: entity::cc_alert_chans::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            tier: entity.tier,
            role: parse_optional_u64_from_string(entity.role)?,
            gen: entity.gen,
            stage: entity.stage,
            cooldown: entity.cooldown.max(0) as u32,
            prefix: entity.prefix,
        })
    }

    /// Whether this row covers the given tier and generation.
    ///
    /// The tier matches either the row's `tier` or its alternate `prefix` label.
    pub fn matches(&self, tier: &str, gen: &str) -> bool {
        let tier_matches = self.tier.eq_ignore_ascii_case(tier)
            || self
                .prefix
                .as_deref()
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(tier));

        tier_matches && self.gen.eq_ignore_ascii_case(gen)
    }

    /// Whether the row's stage names exactly the given stage.
    pub fn targets_stage(&self, stage: Stage) -> bool {
        self.stage.eq_ignore_ascii_case(stage.as_str())
    }

    /// Whether the row applies to every stage.
    pub fn targets_any_stage(&self) -> bool {
        self.stage.eq_ignore_ascii_case(ANY_STAGE)
    }
}
