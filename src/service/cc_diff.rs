//! Diff of freshly parsed thread states against the tracked status cache.

use std::collections::{HashMap, HashSet};

use crate::model::{cc_status::TrackedStatus, forum_thread::ParsedThreadData};

/// Result of comparing a poll against the cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadDiff {
    /// Fresh threads that are new or whose stage or progress moved, in poll order.
    pub changed: Vec<ParsedThreadData>,
    /// Cached threads absent from the poll, in cache order.
    pub removed: Vec<TrackedStatus>,
}

/// Compares fresh thread states with the cached ones.
///
/// Pure function of its inputs. A cached thread counts as removed when its id is
/// missing from `fresh`, which means it left the monitored nodes, was deleted or
/// now carries an administrative prefix.
///
/// # Arguments
/// - `fresh` - Parsed threads from this cycle's poll
/// - `cached` - Tracked statuses loaded at the start of the cycle
///
/// # Returns
/// - `ThreadDiff` - Changed and removed threads
pub fn diff(fresh: &[ParsedThreadData], cached: &[TrackedStatus]) -> ThreadDiff {
    let previous: HashMap<i64, &TrackedStatus> =
        cached.iter().map(|status| (status.thread_id, status)).collect();
    let seen: HashSet<i64> = fresh.iter().map(|thread| thread.thread_id).collect();

    let changed = fresh
        .iter()
        .filter(|thread| match previous.get(&thread.thread_id) {
            Some(status) => status.stage != thread.stage || status.progress != thread.progress,
            None => true,
        })
        .cloned()
        .collect();

    let removed = cached
        .iter()
        .filter(|status| !seen.contains(&status.thread_id))
        .cloned()
        .collect();

    ThreadDiff { changed, removed }
}
