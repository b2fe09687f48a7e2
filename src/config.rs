use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_FORUM_BASE_URL: &str = "https://www.smogon.com/forums";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;
const DEFAULT_POLL_JITTER_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub forum_database_url: String,

    pub discord_bot_token: String,

    pub forum_base_url: String,
    pub poll_interval: Duration,
    pub poll_jitter: Duration,
    pub node_map_path: Option<String>,
    pub resync_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            forum_database_url: required("FORUM_DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            forum_base_url: optional("FORUM_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FORUM_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            poll_interval: Duration::from_secs(parse_or(
                "CC_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )?),
            poll_jitter: Duration::from_secs(parse_or(
                "CC_POLL_JITTER_SECS",
                DEFAULT_POLL_JITTER_SECS,
            )?),
            node_map_path: optional("CC_NODE_MAP_PATH"),
            resync_on_startup: parse_or("CC_RESYNC_ON_STARTUP", false)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        None => Ok(default),
    }
}
