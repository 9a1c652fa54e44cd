//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Days;
use integration_tests::{
    assert_json, assert_status, check_test_env, cleanup, fixtures::*, insert_interaction,
    insert_reaction, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_celebrity(server: &TestServer, body: &CelebrityBody) -> CelebrityResponse {
    let response = server.post("/celebrities", body).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Celebrity Tests
// ============================================================================

#[tokio::test]
async fn test_celebrity_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_celebrity(
        &server,
        &CelebrityBody {
            name: format!("  Crud Celebrity {}  ", unique_suffix()),
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
            is_celebrity: None,
        },
    )
    .await;

    assert!(created.name.starts_with("Crud Celebrity"));
    assert!(!created.is_celebrity);
    assert!(!created.created_at.is_empty());

    // Listed
    let response = server.get("/celebrities").await.unwrap();
    let all: Vec<CelebrityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|c| c.id == created.id));

    // Update keeps the flag when omitted, blank image becomes null
    let response = server
        .put(
            &format!("/celebrities/{}", created.id),
            &json!({"name": "Renamed", "imageUrl": ""}),
        )
        .await
        .unwrap();
    let updated: CelebrityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.image_url, None);
    assert!(!updated.is_celebrity);

    // Toggle
    let response = server
        .put(
            &format!("/celebrities/{}/toggle-is-celebrity", created.id),
            &json!({"isCelebrity": true}),
        )
        .await
        .unwrap();
    let toggled: CelebrityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggled.is_celebrity);

    // Single fetch
    let response = server.get(&format!("/celebrities/{}", created.id)).await.unwrap();
    let fetched: CelebrityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, "Renamed");

    cleanup(&server.pool, &[created.id]).await.unwrap();
}

#[tokio::test]
async fn test_celebrity_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/celebrities", &json!({"name": "   "})).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Name is required");

    let response = server.post("/celebrities", &json!({})).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Name is required");

    let response = server
        .post("/celebrities", &json!({"name": "X", "imageUrl": "not a url"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put("/celebrities/abc/toggle-is-celebrity", &json!({"isCelebrity": true}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_toggle_requires_boolean() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_celebrity(&server, &CelebrityBody::unique(false)).await;

    let response = server
        .put(
            &format!("/celebrities/{}/toggle-is-celebrity", created.id),
            &json!({"isCelebrity": "yes"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    cleanup(&server.pool, &[created.id]).await.unwrap();
}

#[tokio::test]
async fn test_missing_celebrity_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let missing = i64::MAX;

    let response = server.get(&format!("/celebrities/{missing}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put(&format!("/celebrities/{missing}"), &json!({"name": "Ghost"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put(
            &format!("/celebrities/{missing}/toggle-is-celebrity"),
            &json!({"isCelebrity": true}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post(&format!("/celebrities/{missing}/aliases"), &AliasBody::new("Ghost"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Alias Tests
// ============================================================================

#[tokio::test]
async fn test_alias_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let celebrity = create_celebrity(&server, &CelebrityBody::unique(true)).await;
    let path = format!("/celebrities/{}/aliases", celebrity.id);

    let response = server.post(&path, &AliasBody::new("Sếp")).await.unwrap();
    let alias: AliasResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(alias.celebrity_id, celebrity.id);
    assert_eq!(alias.alias, "Sếp");

    let response = server.post(&path, &json!({"alias": ""})).await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Alias is required");

    let response = server.get(&path).await.unwrap();
    let aliases: Vec<AliasResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(aliases.len(), 1);

    // Delete, then confirm it is gone
    let response = server.delete(&format!("/aliases/{}", alias.id)).await.unwrap();
    let deleted: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted.success);

    let response = server.get(&path).await.unwrap();
    let aliases: Vec<AliasResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(aliases.is_empty());

    // Deleting again still succeeds
    let response = server.delete(&format!("/aliases/{}", alias.id)).await.unwrap();
    let deleted: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(deleted.success);

    cleanup(&server.pool, &[celebrity.id]).await.unwrap();
}

// ============================================================================
// Aggregate Tests
// ============================================================================

#[tokio::test]
async fn test_top_reactions_requires_date_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/top-reactions?endDate=2024-01-31").await.unwrap();
    let err: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error, "Missing date range");
}

#[tokio::test]
async fn test_unpublished_celebrity_excluded() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let window = unique_window();
    let a = create_celebrity(&server, &CelebrityBody::unique(true)).await;
    let b = create_celebrity(&server, &CelebrityBody::unique(false)).await;

    insert_interaction(&server.pool, a.id, (10, 2, 1), Some("Music"), window.0).await.unwrap();
    insert_interaction(&server.pool, b.id, (100, 50, 20), Some("Music"), window.0).await.unwrap();
    insert_reaction(&server.pool, b.id, 500, window.0).await.unwrap();

    let response = server.get_query("/top-celebrities", &window_params(window, &[])).await.unwrap();
    let ranked: Vec<TopCelebrityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].celebrity_id, a.id);
    assert!(ranked[0].is_celebrity);
    assert_eq!(ranked[0].total_interactions, 13);
    assert_eq!(ranked[0].total_reactions, 0);
    assert_eq!(ranked[0].main_aspects, vec!["Music"]);

    let response = server.get_query("/top-reactions", &window_params(window, &[])).await.unwrap();
    let reactions: Vec<TopReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reactions.is_empty());

    let response = server.get_query("/stats", &window_params(window, &[])).await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_interactions, 13);
    assert_eq!(stats.total_celebrities, 1);

    cleanup(&server.pool, &[a.id, b.id]).await.unwrap();
}

#[tokio::test]
async fn test_sentiment_ranking_and_alias_rollup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let window = unique_window();
    let happy = create_celebrity(&server, &CelebrityBody::unique(true)).await;
    let grumpy = create_celebrity(&server, &CelebrityBody::unique(true)).await;

    insert_interaction(&server.pool, happy.id, (20, 1, 0), Some("Film"), window.0).await.unwrap();
    insert_interaction(&server.pool, grumpy.id, (2, 9, 0), Some("Sport"), window.1).await.unwrap();

    let alias_path = format!("/celebrities/{}/aliases", happy.id);
    for alias in ["Smiley", "Smiley", "Sunny"] {
        let response = server.post(&alias_path, &AliasBody::new(alias)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_query("/top-celebrities", &window_params(window, &[("sentiment", "negative")]))
        .await
        .unwrap();
    let ranked: Vec<TopCelebrityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = ranked.iter().map(|r| r.celebrity_id).collect();
    assert_eq!(ids, vec![grumpy.id, happy.id]);

    let response = server
        .get_query("/top-celebrities", &window_params(window, &[("sentiment", "positive")]))
        .await
        .unwrap();
    let ranked: Vec<TopCelebrityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ranked[0].celebrity_id, happy.id);
    assert_eq!(ranked[0].celebrity_aliases.as_deref(), Some("Smiley, Sunny"));
    assert_eq!(ranked[0].aliases, vec!["Smiley", "Sunny"]);

    // Topic filter narrows to one celebrity
    let response = server
        .get_query("/top-celebrities", &window_params(window, &[("topic", "Sport")]))
        .await
        .unwrap();
    let ranked: Vec<TopCelebrityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].celebrity_id, grumpy.id);

    cleanup(&server.pool, &[happy.id, grumpy.id]).await.unwrap();
}

#[tokio::test]
async fn test_stats_match_ranking_and_dashboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let window = unique_window();
    let mut ids = Vec::new();
    for (i, counts) in [(5, 1, 1), (0, 3, 2), (7, 0, 0)].into_iter().enumerate() {
        let celebrity = create_celebrity(&server, &CelebrityBody::unique(true)).await;
        let day = window.0 + Days::new(i as u64);
        insert_interaction(&server.pool, celebrity.id, counts, Some("Art"), day).await.unwrap();
        insert_reaction(&server.pool, celebrity.id, 10 * (i as i64 + 1), day).await.unwrap();
        ids.push(celebrity.id);
    }

    let response = server.get_query("/top-celebrities", &window_params(window, &[])).await.unwrap();
    let ranked: Vec<TopCelebrityResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server.get_query("/stats", &window_params(window, &[])).await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.total_celebrities, ranked.len() as i64);
    assert_eq!(stats.total_positive, ranked.iter().map(|r| r.total_positive).sum::<i64>());
    assert_eq!(stats.total_negative, ranked.iter().map(|r| r.total_negative).sum::<i64>());
    assert_eq!(stats.total_neutral, ranked.iter().map(|r| r.total_neutral).sum::<i64>());

    let response = server.get_query("/top-reactions", &window_params(window, &[])).await.unwrap();
    let reactions: Vec<TopReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let totals: Vec<i64> = reactions.iter().map(|r| r.total_reactions).collect();
    assert_eq!(totals, vec![30, 20, 10]);
    assert!(reactions
        .iter()
        .all(|r| ranked.iter().any(|c| c.celebrity_id == r.celebrity_id)));

    let response = server.get_query("/dashboard", &window_params(window, &[])).await.unwrap();
    let dashboard: DashboardResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(dashboard.stats.total_interactions, stats.total_interactions);
    assert_eq!(dashboard.top_celebrities.len(), ranked.len());
    assert_eq!(dashboard.top_reactions.len(), reactions.len());

    cleanup(&server.pool, &ids).await.unwrap();
}

#[tokio::test]
async fn test_interactions_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let window = unique_window();
    let celebrity = create_celebrity(&server, &CelebrityBody::unique(true)).await;
    let hidden = create_celebrity(&server, &CelebrityBody::unique(false)).await;

    insert_interaction(&server.pool, celebrity.id, (1, 0, 0), Some("Food"), window.0).await.unwrap();
    insert_interaction(&server.pool, celebrity.id, (2, 0, 0), Some("Law"), window.1).await.unwrap();
    insert_interaction(&server.pool, hidden.id, (3, 0, 0), Some("Food"), window.1).await.unwrap();

    let response = server.get_query("/interactions", &window_params(window, &[])).await.unwrap();
    let rows: Vec<InteractionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].interaction_date, window.1);
    assert!(rows.iter().all(|r| r.celebrity_id == celebrity.id));

    let response = server
        .get_query("/interactions", &window_params(window, &[("topic", "Food"), ("limit", "5")]))
        .await
        .unwrap();
    let rows: Vec<InteractionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].field.as_deref(), Some("Food"));
    assert_eq!(rows[0].total, 1);

    let response = server
        .get_query("/interactions", &window_params(window, &[("limit", "0")]))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    cleanup(&server.pool, &[celebrity.id, hidden.id]).await.unwrap();
}
