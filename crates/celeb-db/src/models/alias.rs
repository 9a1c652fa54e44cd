//! Celebrity alias database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for celebrity_aliases table
#[derive(Debug, Clone, FromRow)]
pub struct AliasModel {
    pub id: i64,
    pub celebrity_id: i64,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}
