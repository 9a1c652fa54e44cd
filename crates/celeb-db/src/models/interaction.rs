//! Interaction database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Interaction row joined with its celebrity
#[derive(Debug, Clone, FromRow)]
pub struct InteractionModel {
    pub id: i64,
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub is_celebrity: bool,
    pub positive_count: i32,
    pub negative_count: i32,
    pub neutral_count: i32,
    pub field: Option<String>,
    pub interaction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
