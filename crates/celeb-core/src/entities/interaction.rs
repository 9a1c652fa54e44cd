//! Interaction entity - one day/topic bucket of sentiment counts

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::EntityId;

/// Interaction row joined with its celebrity's name and published flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub id: EntityId,
    pub celebrity_id: EntityId,
    pub celebrity_name: String,
    pub is_celebrity: bool,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
    /// Topic tag; `None` when the feed did not classify the bucket
    pub field: Option<String>,
    pub interaction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Interaction {
    /// Sum of the three sentiment buckets
    pub fn total(&self) -> i64 {
        i64::from(self.positive_count) + i64::from(self.negative_count) + i64::from(self.neutral_count)
    }
}

/// Whether a stored `field` value is an actual topic
///
/// The feed sometimes writes the string `null` instead of SQL NULL.
pub fn is_real_topic(field: &str) -> bool {
    let field = field.trim();
    !field.is_empty() && field != "null"
}
