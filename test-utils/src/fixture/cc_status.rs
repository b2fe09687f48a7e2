//! Tracked status fixtures.

use entity::cc_status;

/// Default stage label.
pub const DEFAULT_STAGE: &str = "QC";

/// Default progress.
pub const DEFAULT_PROGRESS: &str = "0/2";

/// Creates a tracked status entity model with default values.
pub fn entity(thread_id: i64) -> cc_status::Model {
    cc_status::Model {
        thread_id,
        stage: DEFAULT_STAGE.to_string(),
        progress: DEFAULT_PROGRESS.to_string(),
    }
}
