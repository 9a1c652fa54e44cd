//! Celebrity handlers
//!
//! Endpoints for the celebrity directory.

use axum::{extract::State, Json};
use celeb_service::{
    CelebrityResponse, CelebrityService, CreateCelebrityRequest, ToggleCelebrityRequest,
    UpdateCelebrityRequest,
};

use crate::extractors::{IdPath, JsonBody, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all celebrities
///
/// GET /celebrities
pub async fn list_celebrities(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CelebrityResponse>>> {
    let service = CelebrityService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Get celebrity by ID
///
/// GET /celebrities/{id}
pub async fn get_celebrity(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<CelebrityResponse>> {
    let service = CelebrityService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// Create a celebrity
///
/// POST /celebrities
pub async fn create_celebrity(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCelebrityRequest>,
) -> ApiResult<Json<CelebrityResponse>> {
    let service = CelebrityService::new(state.service_context());
    Ok(Json(service.create(request).await?))
}

/// Update a celebrity
///
/// PUT /celebrities/{id}
pub async fn update_celebrity(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCelebrityRequest>,
) -> ApiResult<Json<CelebrityResponse>> {
    let service = CelebrityService::new(state.service_context());
    Ok(Json(service.update(id, request).await?))
}

/// Publish or hide a celebrity
///
/// PUT /celebrities/{id}/toggle-is-celebrity
pub async fn toggle_is_celebrity(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<ToggleCelebrityRequest>,
) -> ApiResult<Json<CelebrityResponse>> {
    let service = CelebrityService::new(state.service_context());
    Ok(Json(service.toggle_is_celebrity(id, request).await?))
}
