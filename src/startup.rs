use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Connects to the bot database and runs pending migrations.
///
/// Establishes a connection pool to the bot's own database using the connection
/// string from configuration, then runs all pending SeaORM migrations so the status
/// cache, subscription and cooldown tables are up to date. This must complete before
/// any sync runs.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to the forum database.
///
/// The forum schema belongs to the forum software; the bot only reads from it and
/// never runs migrations against it.
///
/// # Arguments
/// - `config` - Application configuration containing the forum database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected forum database
/// - `Err(AppError::DbErr)` - Failed to connect
pub async fn connect_to_forum_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.forum_database_url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}
