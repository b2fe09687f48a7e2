//! Forum thread factory for populating the forum tables created by
//! `TestBuilder::with_forum_tables`.
//!
//! The forum tables have no SeaORM entities, so rows are inserted with raw SQL.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Statement, Value};

/// Factory for creating forum threads with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// ForumThreadFactory::new(&db, 42, 758)
///     .title("Zapdos [QC 0/2]")
///     .prefix_id(3)
///     .build()
///     .await?;
/// ```
pub struct ForumThreadFactory<'a> {
    db: &'a DatabaseConnection,
    thread_id: i64,
    node_id: i64,
    title: String,
    prefix_id: i64,
    post_date: DateTime<Utc>,
    discussion_state: String,
}

impl<'a> ForumThreadFactory<'a> {
    /// Creates a new ForumThreadFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Thread {thread_id}"`
    /// - prefix_id: `0` (no prefix)
    /// - post_date: now
    /// - discussion_state: `"visible"`
    pub fn new(db: &'a DatabaseConnection, thread_id: i64, node_id: i64) -> Self {
        Self {
            db,
            thread_id,
            node_id,
            title: format!("Thread {}", thread_id),
            prefix_id: 0,
            post_date: Utc::now(),
            discussion_state: "visible".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn prefix_id(mut self, prefix_id: i64) -> Self {
        self.prefix_id = prefix_id;
        self
    }

    pub fn post_date(mut self, post_date: DateTime<Utc>) -> Self {
        self.post_date = post_date;
        self
    }

    pub fn discussion_state(mut self, state: impl Into<String>) -> Self {
        self.discussion_state = state.into();
        self
    }

    /// Inserts the thread row.
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(), DbErr> {
        self.db
            .execute_raw(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "INSERT INTO xf_thread (thread_id, node_id, title, prefix_id, post_date, discussion_state) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                [
                    Value::from(self.thread_id),
                    Value::from(self.node_id),
                    Value::from(self.title),
                    Value::from(self.prefix_id),
                    Value::from(self.post_date.timestamp()),
                    Value::from(self.discussion_state),
                ],
            ))
            .await?;

        Ok(())
    }
}

/// Creates a thread with default values in the given node.
pub async fn create_thread(
    db: &DatabaseConnection,
    thread_id: i64,
    node_id: i64,
    title: &str,
) -> Result<(), DbErr> {
    ForumThreadFactory::new(db, thread_id, node_id)
        .title(title)
        .build()
        .await
}

/// Creates the master-language phrase holding a thread prefix label.
///
/// # Arguments
/// - `db` - Database connection
/// - `prefix_id` - Forum prefix id
/// - `label` - Display label, e.g. `"Quality Control"`
pub async fn create_prefix(
    db: &DatabaseConnection,
    prefix_id: i64,
    label: &str,
) -> Result<(), DbErr> {
    db.execute_raw(Statement::from_sql_and_values(
        DbBackend::Sqlite,
        "INSERT INTO xf_phrase (language_id, title, phrase_text) VALUES (0, ?, ?)",
        [
            Value::from(format!("thread_prefix.{}", prefix_id)),
            Value::from(label.to_string()),
        ],
    ))
    .await?;

    Ok(())
}
