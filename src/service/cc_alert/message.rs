//! Alert classification and message content.

use crate::model::{cc_status::TrackedStatus, forum_thread::ParsedThreadData, stage::Stage};
use crate::service::cc_parse::rules::GP_UNKNOWN_PROGRESS;

/// Kind of alert a changed thread produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    ReadyForQc,
    ReadyForGp,
    Update,
}

impl AlertKind {
    /// Decides which alert, if any, a changed thread produces.
    ///
    /// # Arguments
    /// - `thread` - Changed thread
    /// - `previous` - Cached state of the thread before this cycle, if it was tracked
    ///
    /// # Returns
    /// - `Some(AlertKind)` - The alert to send
    /// - `None` - The change is not announced (WIP and HTML moves, or a thread still
    ///   waiting for its first GP check)
    pub fn classify(thread: &ParsedThreadData, previous: Option<&TrackedStatus>) -> Option<Self> {
        let awaiting_gp = thread.stage == Stage::Gp && thread.progress.starts_with('0');
        let was_awaiting_gp = previous.is_some_and(|status| {
            status.stage == Stage::Gp && status.progress == GP_UNKNOWN_PROGRESS
        });

        if awaiting_gp && !was_awaiting_gp {
            return Some(Self::ReadyForGp);
        }
        if thread.is_ready_for_qc() {
            return Some(Self::ReadyForQc);
        }

        match thread.stage {
            Stage::Qc | Stage::Done => Some(Self::Update),
            Stage::Wip | Stage::Gp | Stage::Html => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::ReadyForQc => "Ready for QC!",
            Self::ReadyForGp => "Ready for GP!",
            Self::Update => "Thread updated",
        }
    }

    /// GP-ready alerts never mention a role.
    pub fn pings(&self) -> bool {
        !matches!(self, Self::ReadyForGp)
    }
}

/// URL of a forum thread.
pub fn thread_url(forum_base_url: &str, thread_id: i64) -> String {
    format!("{}/threads/{}/", forum_base_url.trim_end_matches('/'), thread_id)
}

/// Builds the plain-text alert for a thread.
///
/// # Arguments
/// - `kind` - Alert kind
/// - `thread` - Changed thread
/// - `role` - Role to mention in front of the message
/// - `forum_base_url` - Forum root used to build the thread link
pub fn build_content(
    kind: AlertKind,
    thread: &ParsedThreadData,
    role: Option<u64>,
    forum_base_url: &str,
) -> String {
    let mention = role.map(|id| format!("<@&{}> ", id)).unwrap_or_default();
    let status = format!("{} {}", thread.stage, thread.progress);

    format!(
        "{}**{}** {}\n{}\nStatus: {}",
        mention,
        kind.heading(),
        thread.title,
        thread_url(forum_base_url, thread.thread_id),
        status.trim_end()
    )
}
