//! Dashboard query-string extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use celeb_service::DashboardParams;

use crate::response::ApiError;

/// `startDate`, `endDate`, `timeRange`, `topic`, `sentiment` and `limit`
///
/// Values stay textual here; the service decides the defaults per endpoint.
#[derive(Debug, Clone, Default)]
pub struct WindowQuery(pub DashboardParams);

#[async_trait]
impl<S> FromRequestParts<S> for WindowQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<DashboardParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(WindowQuery(params))
    }
}
