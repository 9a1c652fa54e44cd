//! Aggregate query rows

use sqlx::FromRow;

/// Row of the top-celebrities ranking
#[derive(Debug, Clone, FromRow)]
pub struct TopCelebrityModel {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
    /// Raw alias texts ordered by alias id
    pub aliases: Vec<String>,
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub main_aspects: Vec<String>,
    pub total_reactions: i64,
}

/// Row of the top-reactions ranking
#[derive(Debug, Clone, FromRow)]
pub struct TopReactionModel {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub image_url: Option<String>,
    pub total_reactions: i64,
}

/// Single-row stats summary
#[derive(Debug, Clone, FromRow)]
pub struct StatsModel {
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_celebrities: i64,
}
