//! Route definitions
//!
//! Routes are mounted at the root, matching the paths the dashboard calls.

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::handlers::{aliases, analytics, celebrities, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(celebrity_routes())
        .merge(alias_routes())
        .merge(analytics_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Celebrity directory routes
fn celebrity_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/celebrities",
            get(celebrities::list_celebrities).post(celebrities::create_celebrity),
        )
        .route(
            "/celebrities/:id",
            get(celebrities::get_celebrity).put(celebrities::update_celebrity),
        )
        .route(
            "/celebrities/:id/toggle-is-celebrity",
            put(celebrities::toggle_is_celebrity),
        )
        .route(
            "/celebrities/:id/aliases",
            get(aliases::list_aliases).post(aliases::create_alias),
        )
}

/// Alias routes
fn alias_routes() -> Router<AppState> {
    Router::new().route("/aliases/:id", delete(aliases::delete_alias))
}

/// Aggregate view routes
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/interactions", get(analytics::list_interactions))
        .route("/stats", get(analytics::get_stats))
        .route("/top-celebrities", get(analytics::top_celebrities))
        .route("/top-reactions", get(analytics::top_reactions))
        .route("/dashboard", get(analytics::dashboard))
}
