use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Minimal copy of the forum's thread table.
const FORUM_THREAD_TABLE: &str = "CREATE TABLE xf_thread (
    thread_id INTEGER PRIMARY KEY,
    node_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    prefix_id INTEGER NOT NULL DEFAULT 0,
    post_date INTEGER NOT NULL,
    discussion_state TEXT NOT NULL DEFAULT 'visible'
)";

/// Minimal copy of the forum's phrase table.
const FORUM_PHRASE_TABLE: &str = "CREATE TABLE xf_phrase (
    phrase_id INTEGER PRIMARY KEY AUTOINCREMENT,
    language_id INTEGER NOT NULL DEFAULT 0,
    title BLOB NOT NULL,
    phrase_text TEXT NOT NULL
)";

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{CcStatus, CcTimestamp};
///
/// let test = TestBuilder::new()
///     .with_table(CcStatus)
///     .with_table(CcTimestamp)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL statements executed after the entity tables.
    ///
    /// Used for tables the bot does not own, such as the forum schema.
    raw: Vec<&'static str>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            raw: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the status cache and last-check tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_cache_tables(self) -> Self {
        self.with_table(CcStatus).with_table(CcTimestamp)
    }

    /// Adds every table owned by the bot.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_bot_tables(self) -> Self {
        self.with_cache_tables()
            .with_table(CcAlertChans)
            .with_table(CcCooldown)
    }

    /// Adds the forum's thread and phrase tables.
    ///
    /// The forum database is external, so these tables are created from raw SQL
    /// mirroring only the columns the poller reads.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_forum_tables(mut self) -> Self {
        self.raw.push(FORUM_THREAD_TABLE);
        self.raw.push(FORUM_PHRASE_TABLE);
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added to the builder, in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_raw(self.raw).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
