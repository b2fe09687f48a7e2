//! Discord bot integration.
//!
//! The bot's gateway connection keeps subscription data consistent with Discord:
//! subscriptions of deleted channels and of guilds the bot left are removed. Its
//! HTTP client is shared with the alert dispatcher, so alerts and gateway events use
//! a single Discord client.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent, which delivers channel and guild
//! deletion events. Alerts are sent through the HTTP API and need no intent.

pub mod handler;
pub mod start;
