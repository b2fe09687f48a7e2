//! Ordered stage rules for C&C threads.
//!
//! Each rule inspects the thread's prefix label and a pre-scanned title and either
//! resolves the stage or passes. Rules are tried in [`STAGE_RULES`] order and the
//! first match wins; a thread no rule resolves is `Wip`.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::model::stage::Stage;

/// Progress recorded for a thread that finished QC and awaits its first GP check.
pub const GP_UNKNOWN_PROGRESS: &str = "0/?";

/// Labeled progress marker such as "QC 1/2", "GP: 0/1" or "[QC(2 / 2)".
static LABELED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(QC|GP)[\s:\-(\[]*(\d)\s*/\s*(\d)\b").expect("marker regex is valid")
});

/// Bare fraction such as "1/2".
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d)\s*/\s*(\d)\b").expect("fraction regex is valid"));

/// Stage and progress resolved by a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    pub stage: Stage,
    /// Empty when the rule resolved the stage without a count.
    pub progress: String,
}

impl StageResult {
    fn new(stage: Stage, progress: impl Into<String>) -> Self {
        Self {
            stage,
            progress: progress.into(),
        }
    }
}

/// Approvals out of the required count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub approved: u32,
    pub required: u32,
}

impl Fraction {
    pub fn is_complete(&self) -> bool {
        self.approved == self.required
    }

    pub fn progress(&self) -> String {
        format!("{}/{}", self.approved, self.required)
    }
}

/// Everything the rules need from a title, extracted once per thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleScan {
    /// Title contains "done" in any case.
    pub mentions_done: bool,
    /// First "QC n/d" marker.
    pub qc: Option<Fraction>,
    /// First "GP n/d" marker.
    pub gp: Option<Fraction>,
    /// First fraction not part of a labeled marker.
    pub unlabeled: Option<Fraction>,
}

impl TitleScan {
    pub fn new(title: &str) -> Self {
        let mut scan = Self {
            mentions_done: title.to_lowercase().contains("done"),
            ..Self::default()
        };

        let mut labeled_spans: Vec<Range<usize>> = Vec::new();
        for captures in LABELED_MARKER.captures_iter(title) {
            let (Some(whole), Some(label), Some(fraction)) =
                (captures.get(0), captures.get(1), fraction_of(&captures, 2))
            else {
                continue;
            };
            labeled_spans.push(whole.range());

            let slot = if label.as_str().eq_ignore_ascii_case("qc") {
                &mut scan.qc
            } else {
                &mut scan.gp
            };
            slot.get_or_insert(fraction);
        }

        scan.unlabeled = FRACTION.captures_iter(title).find_map(|captures| {
            let whole = captures.get(0)?;
            let overlaps = labeled_spans
                .iter()
                .any(|span| span.start < whole.end() && whole.start() < span.end);
            if overlaps {
                return None;
            }
            fraction_of(&captures, 1)
        });

        scan
    }

    /// Progress for a stage set without a count, from the marker labeled with that
    /// stage or else the first unlabeled fraction.
    pub fn backfill(&self, stage: Stage) -> String {
        let labeled = match stage {
            Stage::Qc => self.qc,
            Stage::Gp => self.gp,
            _ => return String::new(),
        };

        labeled
            .or(self.unlabeled)
            .map(|fraction| fraction.progress())
            .unwrap_or_default()
    }
}

/// Reads the two digit groups starting at capture group `first`.
fn fraction_of(captures: &regex::Captures<'_>, first: usize) -> Option<Fraction> {
    Some(Fraction {
        approved: captures.get(first)?.as_str().parse().ok()?,
        required: captures.get(first + 1)?.as_str().parse().ok()?,
    })
}

/// Input to a stage rule.
pub struct RuleInput<'a> {
    pub phrase_text: Option<&'a str>,
    pub scan: &'a TitleScan,
}

pub type StageRule = fn(&RuleInput<'_>) -> Option<StageResult>;

/// Stage rules in precedence order.
pub const STAGE_RULES: &[StageRule] = &[done_in_title, stage_prefix, title_markers];

/// Applies [`STAGE_RULES`] in order, falling back to `Wip` with no progress.
pub fn resolve_stage(input: &RuleInput<'_>) -> StageResult {
    STAGE_RULES
        .iter()
        .find_map(|rule| rule(input))
        .unwrap_or_else(|| StageResult::new(Stage::Wip, ""))
}

/// A title mentioning "done" marks the thread finished whatever its prefix says.
pub fn done_in_title(input: &RuleInput<'_>) -> Option<StageResult> {
    input
        .scan
        .mentions_done
        .then(|| StageResult::new(Stage::Done, ""))
}

/// A recognised stage prefix sets the stage; the count is backfilled later.
pub fn stage_prefix(input: &RuleInput<'_>) -> Option<StageResult> {
    let stage = Stage::from_prefix(input.phrase_text?.trim())?;
    Some(StageResult::new(stage, ""))
}

/// Stage from the QC and GP markers in the title.
pub fn title_markers(input: &RuleInput<'_>) -> Option<StageResult> {
    let result = match (input.scan.qc, input.scan.gp) {
        // incomplete QC wins whether or not a GP marker is present
        (Some(qc), _) if !qc.is_complete() => StageResult::new(Stage::Qc, qc.progress()),
        // GP only, or complete QC with GP
        (_, Some(gp)) if gp.is_complete() => StageResult::new(Stage::Done, ""),
        (_, Some(gp)) => StageResult::new(Stage::Gp, gp.progress()),
        // complete QC only
        (Some(_), None) => StageResult::new(Stage::Gp, GP_UNKNOWN_PROGRESS),
        (None, None) => return None,
    };

    Some(result)
}
