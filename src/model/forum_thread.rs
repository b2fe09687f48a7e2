//! Domain models for forum threads and their parsed C&C state.

use crate::model::stage::Stage;

/// Thread row read from the forum database.
///
/// `phrase_text` is the resolved display label of the thread's prefix, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumThread {
    /// Forum-assigned thread id.
    pub thread_id: i64,
    /// Id of the subforum (node) containing the thread.
    pub node_id: i64,
    /// Free-text thread title.
    pub title: String,
    /// Prefix label such as "Quality Control", "OU" or "Gen 8".
    pub phrase_text: Option<String>,
}

/// A forum thread joined with the C&C state inferred from its prefix and title.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedThreadData {
    pub thread_id: i64,
    pub node_id: i64,
    pub title: String,
    pub phrase_text: Option<String>,
    /// Canonical generation ids; more than one means the generation is ambiguous.
    pub gen: Vec<String>,
    /// Candidate tiers; more than one means the tier is ambiguous.
    pub tier: Vec<String>,
    pub stage: Stage,
    /// Approval count such as "1/2" or "0/?"; empty when unknown.
    pub progress: String,
}

impl ParsedThreadData {
    /// Whether this state is a fresh request for quality control checks.
    pub fn is_ready_for_qc(&self) -> bool {
        self.stage == Stage::Qc && self.progress.starts_with('0')
    }
}
