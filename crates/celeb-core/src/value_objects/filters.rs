//! Topic and sentiment filters applied to aggregate queries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value meaning "no filter" for both topic and sentiment
pub const ALL: &str = "all";

/// Topic (interaction `field`) filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TopicFilter {
    /// No topic restriction
    #[default]
    All,
    /// Only rows whose `field` equals this value
    Topic(String),
}

impl TopicFilter {
    /// Build from an optional raw query value
    ///
    /// Missing, blank and `all` (any case) all mean no filter.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value.eq_ignore_ascii_case(ALL) => Self::All,
            Some(value) => Self::Topic(value.to_string()),
        }
    }

    /// The topic to bind into SQL, `None` when unfiltered
    pub fn as_topic(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Topic(topic) => Some(topic.as_str()),
        }
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Topic(topic) => f.write_str(topic),
        }
    }
}

/// Ranking order for top-N queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFilter {
    /// Order by total positive count
    Positive,
    /// Order by total negative count
    Negative,
    /// Order by total interactions
    #[default]
    All,
}

impl SentimentFilter {
    /// Build from an optional raw query value; unknown values mean `All`
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("positive") => Self::Positive,
            Some("negative") => Self::Negative,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::All => ALL,
        }
    }

    /// The value a ranked row is ordered by (descending)
    pub fn rank_value(&self, totals: &crate::entities::SentimentTotals) -> i64 {
        match self {
            Self::Positive => totals.positive,
            Self::Negative => totals.negative,
            Self::All => totals.total(),
        }
    }
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
