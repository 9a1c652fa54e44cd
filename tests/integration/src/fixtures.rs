//! Test fixtures and data generators
//!
//! Request/response shapes as the dashboard sees them, plus SQL seeding for
//! interactions and reactions, which have no write endpoint.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Request bodies
// ============================================================================

/// Create/update celebrity body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_celebrity: Option<bool>,
}

impl CelebrityBody {
    pub fn unique(is_celebrity: bool) -> Self {
        Self {
            name: format!("Test Celebrity {}", unique_suffix()),
            image_url: None,
            is_celebrity: Some(is_celebrity),
        }
    }
}

/// Create alias body
#[derive(Debug, Serialize)]
pub struct AliasBody {
    pub alias: String,
}

impl AliasBody {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

// ============================================================================
// Response bodies
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CelebrityResponse {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct AliasResponse {
    pub id: i64,
    pub celebrity_id: i64,
    pub alias: String,
}

#[derive(Debug, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct TopCelebrityResponse {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub is_celebrity: bool,
    pub celebrity_aliases: Option<String>,
    pub aliases: Vec<String>,
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_interactions: i64,
    pub main_aspects: Vec<String>,
    pub total_reactions: i64,
}

#[derive(Debug, Deserialize)]
pub struct TopReactionResponse {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub total_reactions: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_interactions: i64,
    pub total_celebrities: i64,
}

#[derive(Debug, Deserialize)]
pub struct InteractionResponse {
    pub id: i64,
    pub celebrity_id: i64,
    pub field: Option<String>,
    pub interaction_date: NaiveDate,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub top_celebrities: Vec<TopCelebrityResponse>,
    pub top_reactions: Vec<TopReactionResponse>,
    pub stats: StatsResponse,
}

// ============================================================================
// Seeding
// ============================================================================

/// Windows handed out by this process
static WINDOW_SLOT: AtomicU64 = AtomicU64::new(0);

/// Window slots available to one run
const SLOTS_PER_RUN: u64 = 100;

/// Distinct run offsets; keeps every window inside four-digit years
const RUN_OFFSETS: u64 = 1_500;

/// A 10-day window in the far future that no other test uses
///
/// Aggregates are global over a window, so isolation comes from dates.
/// Windows start in year 5000 and end before year 10000.
pub fn unique_window() -> (NaiveDate, NaiveDate) {
    let run = Utc::now().timestamp_micros().rem_euclid(RUN_OFFSETS as i64) as u64;
    let slot = WINDOW_SLOT.fetch_add(1, Ordering::SeqCst) % SLOTS_PER_RUN;
    let base = NaiveDate::from_ymd_opt(5000, 1, 1).unwrap_or(NaiveDate::MIN);
    let start = base + Days::new((run * SLOTS_PER_RUN + slot) * 10);
    (start, start + Days::new(9))
}

/// `startDate`/`endDate` for a window plus any extra filters, ready for
/// `TestServer::get_query`
pub fn window_params(
    window: (NaiveDate, NaiveDate),
    extra: &[(&'static str, &str)],
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("startDate", window.0.format("%Y-%m-%d").to_string()),
        ("endDate", window.1.format("%Y-%m-%d").to_string()),
    ];
    params.extend(extra.iter().map(|(key, value)| (*key, (*value).to_string())));
    params
}

pub async fn insert_interaction(
    pool: &PgPool,
    celebrity_id: i64,
    counts: (i32, i32, i32),
    field: Option<&str>,
    date: NaiveDate,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO interactions
            (celebrity_id, positive_count, negative_count, neutral_count, field, interaction_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(celebrity_id)
    .bind(counts.0)
    .bind(counts.1)
    .bind(counts.2)
    .bind(field)
    .bind(date)
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert a reaction at noon UTC on `date`
pub async fn insert_reaction(
    pool: &PgPool,
    celebrity_id: i64,
    total: i64,
    date: NaiveDate,
) -> anyhow::Result<()> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
    let created_at = Utc.from_utc_datetime(&date.and_time(noon));
    sqlx::query(
        "INSERT INTO reactions (celebrity_id, total_reactions, created_at) VALUES ($1, $2, $3)",
    )
    .bind(celebrity_id)
    .bind(total)
    .bind(created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove celebrities created by a test, with everything hanging off them
pub async fn cleanup(pool: &PgPool, ids: &[i64]) -> anyhow::Result<()> {
    for table in ["interactions", "reactions", "celebrity_aliases"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE celebrity_id = ANY($1)"))
            .bind(ids)
            .execute(pool)
            .await?;
    }
    sqlx::query("DELETE FROM celebrities WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_window_stays_in_four_digit_years() {
        let last_start = NaiveDate::from_ymd_opt(5000, 1, 1).unwrap()
            + Days::new((RUN_OFFSETS * SLOTS_PER_RUN - 1) * 10);
        assert!(last_start + Days::new(9) < NaiveDate::from_ymd_opt(10000, 1, 1).unwrap());

        for _ in 0..5 {
            let (start, end) = unique_window();
            assert_eq!(end - start, chrono::Duration::days(9));
            assert_eq!(start.to_string().len(), 10);
            assert_eq!(end.to_string().len(), 10);
        }
    }

    #[test]
    fn test_window_params() {
        let start = NaiveDate::from_ymd_opt(5001, 2, 3).unwrap();
        let window = (start, start + Days::new(9));
        let params = window_params(window, &[("topic", "Sport")]);
        assert_eq!(
            params,
            vec![
                ("startDate", "5001-02-03".to_string()),
                ("endDate", "5001-02-12".to_string()),
                ("topic", "Sport".to_string()),
            ]
        );
    }
}
