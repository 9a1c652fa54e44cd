//! Aggregate view handlers
//!
//! Read-only endpoints backing the dashboard panels.

use axum::{extract::State, Json};
use celeb_service::{
    AnalyticsService, DashboardResponse, DashboardService, InteractionResponse, StatsResponse,
    TopCelebrityResponse, TopReactionResponse,
};

use crate::extractors::WindowQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Raw interaction rows
///
/// GET /interactions?startDate&endDate&topic&limit
pub async fn list_interactions(
    State(state): State<AppState>,
    WindowQuery(params): WindowQuery,
) -> ApiResult<Json<Vec<InteractionResponse>>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.interactions(&params).await?))
}

/// Window-wide totals
///
/// GET /stats?startDate&endDate&topic
pub async fn get_stats(
    State(state): State<AppState>,
    WindowQuery(params): WindowQuery,
) -> ApiResult<Json<StatsResponse>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.stats(&params).await?))
}

/// Ranked celebrities
///
/// GET /top-celebrities?startDate&endDate&topic&sentiment
pub async fn top_celebrities(
    State(state): State<AppState>,
    WindowQuery(params): WindowQuery,
) -> ApiResult<Json<Vec<TopCelebrityResponse>>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.top_celebrities(&params).await?))
}

/// Most-reacted celebrities among the ranked set
///
/// GET /top-reactions?startDate&endDate&topic&sentiment
pub async fn top_reactions(
    State(state): State<AppState>,
    WindowQuery(params): WindowQuery,
) -> ApiResult<Json<Vec<TopReactionResponse>>> {
    let service = AnalyticsService::new(state.service_context());
    Ok(Json(service.top_reactions(&params).await?))
}

/// All panels in one response
///
/// GET /dashboard?timeRange|startDate&endDate&topic&sentiment
pub async fn dashboard(
    State(state): State<AppState>,
    WindowQuery(params): WindowQuery,
) -> ApiResult<Json<DashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    Ok(Json(service.snapshot(&params).await?))
}
