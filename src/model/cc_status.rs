//! Domain models for the tracked C&C status cache.

use crate::model::{forum_thread::ParsedThreadData, stage::Stage};

/// Last known stage and progress of a thread, as stored in the `cc_status` table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedStatus {
    /// Forum thread id, unique per row.
    pub thread_id: i64,
    /// Stage recorded on the previous sync.
    pub stage: Stage,
    /// Progress recorded on the previous sync.
    pub progress: String,
}

impl TrackedStatus {
    /// Converts an entity model to a tracked status at the repository boundary.
    ///
    /// Rows with an unrecognised stage label are read back as `Wip` so that the next
    /// sync treats them as changed and overwrites them.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TrackedStatus` - The converted domain model
    pub fn from_entity(entity: entity::cc_status::Model) -> Self {
        Self {
            thread_id: entity.thread_id,
            stage: entity.stage.parse().unwrap_or(Stage::Wip),
            progress: entity.progress,
        }
    }
}

/// Parameters for inserting or updating a tracked status row.
#[derive(Debug, Clone)]
pub struct UpsertCcStatusParam {
    pub thread_id: i64,
    pub stage: Stage,
    pub progress: String,
}

impl From<&ParsedThreadData> for UpsertCcStatusParam {
    fn from(thread: &ParsedThreadData) -> Self {
        Self {
            thread_id: thread.thread_id,
            stage: thread.stage,
            progress: thread.progress.clone(),
        }
    }
}
