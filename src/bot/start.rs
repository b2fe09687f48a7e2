use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::cc_alert::cooldown::CooldownCache;

/// Builds the Discord client and extracts its HTTP client.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Bot database used by the event handlers
/// - `cooldowns` - Cooldown mirror cleaned up when channels are deleted
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client to start and the shared HTTP client
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    cooldowns: CooldownCache,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, cooldowns))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway; returns once every shard has shut down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
