use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, GuildChannel, Message, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::service::cc_alert::cooldown::CooldownCache;

pub mod channel;
pub mod guild;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub cooldowns: CooldownCache,
}

impl Handler {
    pub fn new(db: DatabaseConnection, cooldowns: CooldownCache) -> Self {
        Self { db, cooldowns }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a channel is deleted in a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.db, &self.cooldowns, ctx, channel, messages).await;
    }

    /// Called when the bot leaves a guild or the guild becomes unavailable
    async fn guild_delete(
        &self,
        ctx: Context,
        incomplete: UnavailableGuild,
        full: Option<Guild>,
    ) {
        guild::handle_guild_delete(&self.db, &self.cooldowns, ctx, incomplete, full).await;
    }
}
