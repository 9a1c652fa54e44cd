//! Path parameter extractors
//!
//! Type-safe extraction of numeric ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use celeb_core::EntityId;

use crate::response::ApiError;

/// Single `:id` path segment parsed as an [`EntityId`]
///
/// Non-numeric or non-positive ids are rejected with 400.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub EntityId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        EntityId::parse(&raw)
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path("Invalid id"))
    }
}
