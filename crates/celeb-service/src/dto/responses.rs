//! Response DTOs for API endpoints
//!
//! Entity rows keep their snake_case column names; summary objects
//! (stats, dashboard) use camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Celebrity / Alias Responses
// ============================================================================

/// Celebrity row
#[derive(Debug, Clone, Serialize)]
pub struct CelebrityResponse {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
    pub created_at: DateTime<Utc>,
}

/// Alias row
#[derive(Debug, Clone, Serialize)]
pub struct AliasResponse {
    pub id: i64,
    pub celebrity_id: i64,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement for deletes
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// Raw interaction row joined with its celebrity
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
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
    pub total: i64,
}

/// One ranked celebrity
#[derive(Debug, Clone, Serialize)]
pub struct TopCelebrityResponse {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub image_url: Option<String>,
    pub is_celebrity: bool,
    /// Deduplicated aliases joined with ", ", null when there are none
    pub celebrity_aliases: Option<String>,
    pub aliases: Vec<String>,
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_interactions: i64,
    pub main_aspects: Vec<String>,
    pub total_reactions: i64,
}

/// One celebrity of the reactions ranking
#[derive(Debug, Clone, Serialize)]
pub struct TopReactionResponse {
    pub celebrity_id: i64,
    pub celebrity_name: String,
    pub image_url: Option<String>,
    pub total_reactions: i64,
}

/// Window-wide totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_positive: i64,
    pub total_negative: i64,
    pub total_neutral: i64,
    pub total_interactions: i64,
    pub total_celebrities: i64,
}

/// Resolved window echoed back to the caller
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Everything the dashboard page renders, fetched in one call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub top_celebrities: Vec<TopCelebrityResponse>,
    pub top_reactions: Vec<TopReactionResponse>,
    pub stats: StatsResponse,
    pub window: WindowResponse,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
