//! Channel event handlers.
//!
//! A deleted channel can never receive alerts again, so its subscriptions and
//! cooldowns are removed as soon as Discord reports the deletion.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildChannel, Message};

use crate::{
    error::handler::log_error,
    service::{cc_alert::cooldown::CooldownCache, cc_subscription::CcSubscriptionService},
};

/// Handles the channel_delete event when a channel is deleted in a guild.
///
/// # Arguments
/// - `db` - Bot database connection
/// - `cooldowns` - Cooldown mirror to drop the channel from
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The deleted guild channel
/// - `_messages` - Cached messages (unused)
pub async fn handle_channel_delete(
    db: &DatabaseConnection,
    cooldowns: &CooldownCache,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let channel_id = channel.id.get();

    match CcSubscriptionService::new(db, cooldowns)
        .remove_channel(channel_id)
        .await
    {
        Ok(0) => {}
        Ok(removed) => tracing::info!(
            "Removed {} C&C subscriptions of deleted channel {} in guild {}",
            removed,
            channel.name,
            channel.guild_id
        ),
        Err(e) => log_error(
            &format!("Failed to remove subscriptions of channel {}", channel_id),
            &e,
        ),
    }
}
