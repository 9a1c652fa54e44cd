//! Celebrity alias entity - an alternative name a celebrity is mentioned by

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Alias attached to a celebrity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CelebrityAlias {
    pub id: EntityId,
    pub celebrity_id: EntityId,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}
