//! Alias handlers

use axum::{extract::State, Json};
use celeb_service::{AliasResponse, AliasService, CreateAliasRequest, SuccessResponse};

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List a celebrity's aliases
///
/// GET /celebrities/{id}/aliases
pub async fn list_aliases(
    State(state): State<AppState>,
    IdPath(celebrity_id): IdPath,
) -> ApiResult<Json<Vec<AliasResponse>>> {
    let service = AliasService::new(state.service_context());
    Ok(Json(service.list(celebrity_id).await?))
}

/// Add an alias
///
/// POST /celebrities/{id}/aliases
pub async fn create_alias(
    State(state): State<AppState>,
    IdPath(celebrity_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateAliasRequest>,
) -> ApiResult<Json<AliasResponse>> {
    let service = AliasService::new(state.service_context());
    Ok(Json(service.create(celebrity_id, request).await?))
}

/// Delete an alias
///
/// DELETE /aliases/{id}
pub async fn delete_alias(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    let service = AliasService::new(state.service_context());
    Ok(Json(service.delete(id).await?))
}
