//! Aggregate read models produced by the analytics queries

use std::collections::BTreeSet;

use crate::value_objects::{AliasList, EntityId};

use super::interaction::is_real_topic;

/// Summed sentiment buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentTotals {
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

impl SentimentTotals {
    pub fn new(positive: i64, negative: i64, neutral: i64) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// positive + negative + neutral
    #[inline]
    pub fn total(&self) -> i64 {
        self.positive + self.negative + self.neutral
    }
}

impl std::ops::Add for SentimentTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            positive: self.positive + rhs.positive,
            negative: self.negative + rhs.negative,
            neutral: self.neutral + rhs.neutral,
        }
    }
}

impl std::iter::Sum for SentimentTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| acc + t)
    }
}

/// One row of the top-celebrities ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCelebrity {
    pub celebrity_id: EntityId,
    pub celebrity_name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
    pub aliases: AliasList,
    pub totals: SentimentTotals,
    /// Distinct topics seen in the counted rows
    pub main_aspects: Vec<String>,
    /// Reactions in the window, regardless of topic
    pub total_reactions: i64,
}

/// One row of the top-reactions ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopReactionCelebrity {
    pub celebrity_id: EntityId,
    pub celebrity_name: String,
    pub image_url: Option<String>,
    pub total_reactions: i64,
}

/// Window-wide totals over all qualifying celebrities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSummary {
    pub totals: SentimentTotals,
    /// Distinct celebrities with at least one qualifying interaction
    pub total_celebrities: i64,
}

impl StatsSummary {
    /// Summarize an already-ranked result set for the same window and topic
    pub fn from_ranked(ranked: &[TopCelebrity]) -> Self {
        Self {
            totals: ranked.iter().map(|c| c.totals).sum(),
            total_celebrities: ranked.len() as i64,
        }
    }

    #[inline]
    pub fn total_interactions(&self) -> i64 {
        self.totals.total()
    }
}

/// Normalize raw topic values into sorted, distinct display tags
pub fn collect_aspects<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .flatten()
        .filter(|f| is_real_topic(f.as_ref()))
        .map(|f| f.as_ref().trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
