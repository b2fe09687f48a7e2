//! Outbound alert delivery.

use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::error::AppError;

/// Delivers a plain-text alert to a channel.
#[async_trait]
pub trait AlertSender: Send + Sync {
    async fn send_alert(&self, channel_id: u64, content: &str) -> Result<(), AppError>;
}

/// Sends alerts as Discord channel messages.
pub struct DiscordAlertSender {
    http: Arc<Http>,
}

impl DiscordAlertSender {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AlertSender for DiscordAlertSender {
    async fn send_alert(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new().all_roles(true));

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}
