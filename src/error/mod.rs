//! Error types and centralized error logging.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Errors
//! never terminate the process once it is running: poll cycles and alert sends log
//! them through `handler::log_error` and retry on the next scheduled cycle.

pub mod config;
pub mod handler;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal inconsistency such as an unparsable stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM, for either the bot or the forum database.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The subforum map file could not be read.
    #[error("Failed to read forum node map: {0}")]
    NodeMapIo(#[from] std::io::Error),

    /// The subforum map file is not a valid node list.
    #[error("Failed to parse forum node map: {0}")]
    NodeMapJson(#[from] serde_json::Error),

    /// Too many threads became ready for QC in a single poll cycle.
    ///
    /// Usually means the status cache was reset; alerts for the whole batch are
    /// dropped while the cache is still updated.
    #[error("{count} threads became ready for QC in one cycle, skipping alerts")]
    MassUpdate {
        /// Number of threads that became ready for QC.
        count: usize,
    },

    /// Another sync holds the lock.
    #[error("A C&C sync is already in progress")]
    SyncInProgress,
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
