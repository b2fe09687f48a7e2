mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{handler::log_error, AppError},
    model::forum_node::ForumNodeMap,
    scheduler::{cc_sync, cooldown_sweep},
    service::{
        cc_alert::{cooldown::CooldownCache, sender::DiscordAlertSender},
        cc_sync::CcSyncService,
    },
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;

    let nodes = match &config.node_map_path {
        Some(path) => ForumNodeMap::from_json_file(path)?,
        None => ForumNodeMap::default_map(),
    };
    if nodes.is_empty() {
        tracing::warn!("No forum nodes configured, the C&C sync will not poll anything");
    }

    let db = startup::connect_to_database(&config).await?;
    let forum_db = startup::connect_to_forum_database(&config).await?;

    let cooldowns = CooldownCache::load(&db).await?;
    tracing::info!("Loaded {} C&C alert cooldowns", cooldowns.len().await);

    tracing::info!("Starting Chatot");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), cooldowns.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let sync_service = CcSyncService::new(
        db.clone(),
        forum_db,
        Arc::new(DiscordAlertSender::new(discord_http)),
        cooldowns.clone(),
        Arc::new(nodes),
        config.forum_base_url.clone(),
    );

    if config.resync_on_startup {
        match sync_service.resync().await {
            Ok(report) => tracing::info!("Startup resync tracked {} threads", report.stored),
            Err(e) => log_error("Startup resync failed", &e),
        }
    }

    let sync_lock = sync_service.lock().clone();
    let shutdown = CancellationToken::new();
    let sync_handle = cc_sync::start_scheduler(
        sync_service,
        config.poll_interval,
        config.poll_jitter,
        shutdown.clone(),
    );
    let mut sweep_scheduler = cooldown_sweep::start_scheduler(db, cooldowns, sync_lock).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");

    shutdown.cancel();
    if let Err(e) = sync_handle.await {
        tracing::error!("C&C sync task ended abnormally: {}", e);
    }
    sweep_scheduler.shutdown().await?;
    shard_manager.shutdown_all().await;

    Ok(())
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG` and defaulting to
/// `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
