//! Celebrity database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for celebrities table
#[derive(Debug, Clone, FromRow)]
pub struct CelebrityModel {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
    pub created_at: DateTime<Utc>,
}
