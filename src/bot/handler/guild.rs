//! Guild event handlers.
//!
//! `guild_delete` fires both when the bot is removed from a guild and when a guild
//! goes down in a Discord outage. Only the former removes subscriptions.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::{
    error::handler::log_error,
    service::{cc_alert::cooldown::CooldownCache, cc_subscription::CcSubscriptionService},
};

/// Handles the guild_delete event.
///
/// # Arguments
/// - `db` - Bot database connection
/// - `cooldowns` - Cooldown mirror
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `incomplete` - Guild id and whether it merely became unavailable
/// - `_full` - Cached guild data, if any (unused)
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    cooldowns: &CooldownCache,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable, keeping subscriptions", guild_id);
        return;
    }

    match CcSubscriptionService::new(db, cooldowns)
        .remove_server(guild_id)
        .await
    {
        Ok(removed) => tracing::info!(
            "Left guild {}, removed {} C&C subscriptions",
            guild_id,
            removed
        ),
        Err(e) => log_error(
            &format!("Failed to remove subscriptions of guild {}", guild_id),
            &e,
        ),
    }
}
