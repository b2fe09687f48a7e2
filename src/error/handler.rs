//! Centralized error logging.
//!
//! Discord rejects some requests for reasons that are routine for a bot sitting in
//! many servers: a channel that hides itself from the bot, a deleted role, an archived
//! thread. Those are logged at debug level so they don't drown out real failures.

use serenity::http::HttpError;

use crate::error::AppError;

/// Discord JSON error codes that are expected in normal operation.
///
/// - 10011 Unknown Role
/// - 10014 Unknown Emoji
/// - 40005 Request entity too large
/// - 50001 Missing Access
/// - 50013 Missing Permissions
/// - 50083 Thread is archived
/// - 160005 Thread is locked
const BENIGN_DISCORD_CODES: &[isize] = &[10011, 10014, 40005, 50001, 50013, 50083, 160005];

/// Extracts the Discord JSON error code from an unsuccessful API request.
fn discord_error_code(err: &serenity::Error) -> Option<isize> {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.error.code)
        }
        _ => None,
    }
}

/// Whether the error is a routine Discord rejection.
pub fn is_benign(err: &AppError) -> bool {
    match err {
        AppError::DiscordErr(err) => {
            discord_error_code(err).is_some_and(|code| BENIGN_DISCORD_CODES.contains(&code))
        }
        _ => false,
    }
}

/// Logs an error with context at a level matching its severity.
///
/// # Arguments
/// - `context` - What was being attempted, e.g. "sending C&C alert to channel 123"
/// - `err` - The error to log
pub fn log_error(context: &str, err: &AppError) {
    match err {
        AppError::MassUpdate { .. } => tracing::warn!("{}: {}", context, err),
        AppError::SyncInProgress => tracing::debug!("{}: {}", context, err),
        err if is_benign(err) => tracing::debug!("{}: {}", context, err),
        err => tracing::error!("{}: {}", context, err),
    }
}
