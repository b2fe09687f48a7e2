//! Forum thread repository for the external forum database.
//!
//! The forum runs XenForo, whose prefix labels live in the phrase table under the key
//! `thread_prefix.<prefix_id>`. Threads are fetched first and their prefix phrases
//! resolved in a second query, keeping the SQL portable between the production MySQL
//! server and the SQLite databases used in tests.

use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement, Value,
};
use std::collections::{BTreeSet, HashMap};

use crate::model::forum_thread::ForumThread;

/// Phrase key prefix for thread prefix labels.
const PREFIX_PHRASE_KEY: &str = "thread_prefix.";

/// Raw thread row as returned by the forum database.
#[derive(Debug, FromQueryResult)]
struct ThreadRow {
    thread_id: i64,
    node_id: i64,
    title: String,
    prefix_id: i64,
}

/// Raw phrase row for a thread prefix.
#[derive(Debug, FromQueryResult)]
struct PhraseRow {
    title: String,
    phrase_text: String,
}

/// Read-only repository over the forum's thread and phrase tables.
pub struct ForumThreadRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumThreadRepository<'a> {
    /// Creates a new ForumThreadRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection to the forum database
    ///
    /// # Returns
    /// - `ForumThreadRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the threads that need to be checked this cycle.
    ///
    /// Returns visible threads in the monitored nodes that were posted at or after
    /// `since`, plus any thread in those nodes whose id is already tracked so that
    /// title edits without a new post are still noticed. A thread that was moved out
    /// of the monitored nodes or deleted is not returned.
    ///
    /// # Arguments
    /// - `node_ids` - Monitored forum node ids
    /// - `since` - Time of the last successful poll
    /// - `tracked_ids` - Thread ids currently held in the status cache
    ///
    /// # Returns
    /// - `Ok(Vec<ForumThread>)` - Matching threads ordered by thread id; empty when no
    ///   nodes are monitored
    /// - `Err(DbErr)` - Forum database error
    pub async fn poll(
        &self,
        node_ids: &[i64],
        since: DateTime<Utc>,
        tracked_ids: &[i64],
    ) -> Result<Vec<ForumThread>, DbErr> {
        if node_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut sql = format!(
            "SELECT thread_id, node_id, title, prefix_id FROM xf_thread \
             WHERE discussion_state = 'visible' AND node_id IN ({}) AND (post_date >= ?",
            placeholders(node_ids.len())
        );
        let mut values: Vec<Value> = node_ids.iter().map(|id| Value::from(*id)).collect();
        values.push(Value::from(since.timestamp()));

        if !tracked_ids.is_empty() {
            sql.push_str(&format!(
                " OR thread_id IN ({})",
                placeholders(tracked_ids.len())
            ));
            values.extend(tracked_ids.iter().map(|id| Value::from(*id)));
        }
        sql.push_str(") ORDER BY thread_id");

        let statement = Statement::from_sql_and_values(self.db.get_database_backend(), sql, values);
        let rows = ThreadRow::find_by_statement(statement).all(self.db).await?;

        let phrases = self
            .get_prefix_phrases(rows.iter().map(|row| row.prefix_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ForumThread {
                phrase_text: phrases.get(&row.prefix_id).cloned(),
                thread_id: row.thread_id,
                node_id: row.node_id,
                title: row.title,
            })
            .collect())
    }

    /// Resolves prefix ids to their master-language display labels.
    ///
    /// Prefix id 0 means "no prefix" and is never looked up.
    ///
    /// # Arguments
    /// - `prefix_ids` - Prefix ids to resolve; duplicates are ignored
    ///
    /// # Returns
    /// - `Ok(HashMap<i64, String>)` - Label for every prefix id that has a phrase
    /// - `Err(DbErr)` - Forum database error
    async fn get_prefix_phrases(
        &self,
        prefix_ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, String>, DbErr> {
        let keys: BTreeSet<String> = prefix_ids
            .filter(|id| *id > 0)
            .map(|id| format!("{}{}", PREFIX_PHRASE_KEY, id))
            .collect();

        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let sql = format!(
            "SELECT CAST(title AS CHAR) AS title, phrase_text FROM xf_phrase \
             WHERE language_id = 0 AND title IN ({})",
            placeholders(keys.len())
        );
        let values: Vec<Value> = keys.into_iter().map(Value::from).collect();

        let statement = Statement::from_sql_and_values(self.db.get_database_backend(), sql, values);
        let rows = PhraseRow::find_by_statement(statement).all(self.db).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.title.strip_prefix(PREFIX_PHRASE_KEY)?.parse().ok()?;
                Some((id, row.phrase_text))
            })
            .collect())
    }
}

/// Comma-separated list of `count` positional placeholders.
fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
