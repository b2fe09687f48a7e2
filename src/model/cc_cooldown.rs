//! Domain models for per-channel alert cooldowns.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Time of the last cooldown-gated alert sent to a channel for one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCooldown {
    /// Discord channel the alert was sent to.
    pub channel_id: u64,
    /// Alert identifier, `cc-<gen><tier>`.
    pub identifier: String,
    /// When the alert was sent.
    pub date: DateTime<Utc>,
}

impl AlertCooldown {
    /// Converts an entity model to a cooldown domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(AlertCooldown)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Stored channel id is not a valid u64
    pub fn from_entity(entity: entity::cc_cooldown::Model) -> Result<Self, AppError> {
        Ok(Self {
            channel_id: parse_u64_from_string(entity.channel_id)?,
            identifier: entity.identifier,
            date: entity.date,
        })
    }
}
