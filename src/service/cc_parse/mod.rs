//! Stage parser turning raw forum threads into normalized C&C state.
//!
//! Parsing never fails: a thread whose prefix and title carry no usable signal is
//! reported as `Wip` with empty progress and whatever generation and tier the
//! subforum implies. Administrative threads are dropped entirely.
//!
//! The parser is organized into separate modules by concern:
//! - `rules` - Ordered stage rules over the prefix and a pre-scanned title
//! - `gen` - Generation lookup from prefixes, titles and subforums
//! - `tier` - Tier narrowing for multi-tier subforums

pub mod gen;
pub mod rules;
pub mod tier;

use crate::model::{
    forum_node::ForumNodeMap,
    forum_thread::{ForumThread, ParsedThreadData},
};

use self::rules::{RuleInput, TitleScan};

/// Prefixes of administrative threads that are never tracked.
pub const EXCLUDED_PREFIXES: &[&str] = &["Resource", "Announcement", "Project"];

/// Parses a single forum thread.
///
/// # Arguments
/// - `thread` - Thread row from the forum poller
/// - `nodes` - Subforum map supplying tiers and generations
///
/// # Returns
/// - `Some(ParsedThreadData)` - Normalized thread state
/// - `None` - Thread carries an administrative prefix and is not tracked
pub fn parse_thread(thread: &ForumThread, nodes: &ForumNodeMap) -> Option<ParsedThreadData> {
    let phrase_text = thread.phrase_text.as_deref().map(str::trim);

    if phrase_text.is_some_and(|prefix| EXCLUDED_PREFIXES.contains(&prefix)) {
        return None;
    }

    let scan = TitleScan::new(&thread.title);
    let mut result = rules::resolve_stage(&RuleInput {
        phrase_text,
        scan: &scan,
    });

    if result.stage.has_progress() && result.progress.is_empty() {
        result.progress = scan.backfill(result.stage);
    }

    Some(ParsedThreadData {
        thread_id: thread.thread_id,
        node_id: thread.node_id,
        title: thread.title.clone(),
        phrase_text: thread.phrase_text.clone(),
        gen: gen::resolve(phrase_text, &thread.title, nodes.gen_for(thread.node_id)),
        tier: tier::resolve(nodes.tiers_for(thread.node_id), phrase_text),
        stage: result.stage,
        progress: result.progress,
    })
}

/// Parses a poll result, dropping administrative threads.
pub fn parse_threads(threads: &[ForumThread], nodes: &ForumNodeMap) -> Vec<ParsedThreadData> {
    threads
        .iter()
        .filter_map(|thread| parse_thread(thread, nodes))
        .collect()
}
