//! Closed set of C&C workflow stages.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stage of a C&C analysis thread.
///
/// Threads move from `Wip` through quality control and grammar checking before the
/// HTML upload and finally `Done`. The string forms are the ones stored in the
/// `cc_status` table and in the `stage` column of alert subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Wip,
    Qc,
    Gp,
    Html,
    Done,
}

impl Stage {
    /// Stored and displayed label of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wip => "WIP",
            Self::Qc => "QC",
            Self::Gp => "GP",
            Self::Html => "HTML",
            Self::Done => "Done",
        }
    }

    /// Maps a forum thread prefix to a stage.
    ///
    /// Only the exact prefix labels used by the C&C subforums are recognised; any
    /// other prefix (tiers, generations, administrative labels) returns `None`.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "WIP" => Some(Self::Wip),
            "Quality Control" => Some(Self::Qc),
            "Copyediting" => Some(Self::Gp),
            "HTML" => Some(Self::Html),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Whether the stage carries a numeric approval count.
    pub fn has_progress(&self) -> bool {
        matches!(self, Self::Qc | Self::Gp)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored stage label is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown C&C stage '{0}'")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    /// Parses a stage label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wip" => Ok(Self::Wip),
            "qc" => Ok(Self::Qc),
            "gp" => Ok(Self::Gp),
            "html" => Ok(Self::Html),
            "done" => Ok(Self::Done),
            _ => Err(UnknownStage(s.to_string())),
        }
    }
}
