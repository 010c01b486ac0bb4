//! Type definitions for daily scores
//!
//! This module defines the fixed metric set and the values the fetcher
//! produces for it.

use std::fmt;

/// A score on the API's 0-100 scale, or `None` when neither today nor
/// yesterday had a usable value
pub type Score = Option<u32>;

/// One of the three tracked daily categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Readiness,
    Sleep,
    Activity,
}

impl Metric {
    /// Every metric, in display and fetch order
    pub const ALL: [Metric; 3] = [Metric::Readiness, Metric::Sleep, Metric::Activity];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Readiness => "Readiness",
            Metric::Sleep => "Sleep",
            Metric::Activity => "Activity",
        }
    }

    /// Collection path under the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Metric::Readiness => "daily_readiness",
            Metric::Sleep => "daily_sleep",
            Metric::Activity => "daily_activity",
        }
    }

    /// Full URL for this metric under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.endpoint())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single `data[i].score` lookup produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// Body was not valid JSON
    NotJson,
    /// Top-level `data` key absent or not an array
    NoDataArray,
    /// `data` had fewer entries than the requested index
    IndexOutOfRange { index: usize, len: usize },
    /// Entry exists but has no `score` key
    NoScoreField { index: usize },
    /// `score` present but not a non-negative integer
    InvalidScore { index: usize },
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::NotJson => write!(f, "response body is not JSON"),
            MissingReason::NoDataArray => write!(f, "no data array"),
            MissingReason::IndexOutOfRange { index, len } => {
                write!(f, "data[{}] out of range (len {})", index, len)
            }
            MissingReason::NoScoreField { index } => write!(f, "data[{}] has no score", index),
            MissingReason::InvalidScore { index } => {
                write!(f, "data[{}].score is not a non-negative integer", index)
            }
        }
    }
}

/// Outcome of one extraction attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreLookup {
    Found(u32),
    /// `score` is present and explicitly null: the day has no score yet.
    /// Final; no fallback to an earlier day.
    Null,
    Missing(MissingReason),
}

impl ScoreLookup {
    /// Convert to an optional score
    pub fn found(&self) -> Option<u32> {
        match self {
            ScoreLookup::Found(score) => Some(*score),
            ScoreLookup::Null | ScoreLookup::Missing(_) => None,
        }
    }
}

/// Fetcher output: metric names and scores as parallel, ordered lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyScores {
    names: Vec<String>,
    scores: Vec<Score>,
}

impl DailyScores {
    /// Build from (metric, score) pairs, keeping their order
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Metric, Score)>) -> Self {
        let (names, scores) = pairs
            .into_iter()
            .map(|(metric, score)| (metric.name().to_string(), score))
            .unzip();
        Self { names, scores }
    }

    /// Metric names, in fetch order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Scores, one per name, in the same order
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of metrics that came back with a value
    pub fn present_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }
}
