//! Celebrity service
//!
//! Directory CRUD plus the published-flag toggle.

use celeb_core::entities::{CelebrityUpdate, NewCelebrity};
use celeb_core::{DomainError, EntityId};
use tracing::{info, instrument};

use crate::dto::requests::required_text;
use crate::dto::{
    CelebrityResponse, CreateCelebrityRequest, ToggleCelebrityRequest, UpdateCelebrityRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const NAME_REQUIRED: &str = "Name is required";

/// Celebrity service
pub struct CelebrityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CelebrityService<'a> {
    /// Create a new CelebrityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All celebrities ordered by name
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CelebrityResponse>> {
        let celebrities = self.ctx.celebrity_repo().find_all().await?;
        Ok(celebrities.into_iter().map(CelebrityResponse::from).collect())
    }

    /// Get celebrity by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: EntityId) -> ServiceResult<CelebrityResponse> {
        let celebrity = self
            .ctx
            .celebrity_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CelebrityNotFound(id))?;

        Ok(CelebrityResponse::from(celebrity))
    }

    /// Create a celebrity; unpublished unless `isCelebrity` is true
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCelebrityRequest) -> ServiceResult<CelebrityResponse> {
        let celebrity = NewCelebrity {
            name: required_text(request.name.as_deref(), NAME_REQUIRED)?,
            image_url: clean_image_url(request.image_url),
            is_celebrity: request.is_celebrity.unwrap_or(false),
        };

        let created = self.ctx.celebrity_repo().create(&celebrity).await?;

        info!(celebrity_id = %created.id, "Celebrity created");
        Ok(CelebrityResponse::from(created))
    }

    /// Overwrite name and image; keep the flag unless provided
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: EntityId,
        request: UpdateCelebrityRequest,
    ) -> ServiceResult<CelebrityResponse> {
        let update = CelebrityUpdate {
            name: required_text(request.name.as_deref(), NAME_REQUIRED)?,
            image_url: clean_image_url(request.image_url),
            is_celebrity: request.is_celebrity,
        };

        let updated = self
            .ctx
            .celebrity_repo()
            .update(id, &update)
            .await?
            .ok_or(DomainError::CelebrityNotFound(id))?;

        info!(celebrity_id = %id, "Celebrity updated");
        Ok(CelebrityResponse::from(updated))
    }

    /// Set only the published flag
    #[instrument(skip(self, request))]
    pub async fn toggle_is_celebrity(
        &self,
        id: EntityId,
        request: ToggleCelebrityRequest,
    ) -> ServiceResult<CelebrityResponse> {
        let is_celebrity = request
            .is_celebrity
            .as_bool()
            .ok_or_else(|| ServiceError::validation("isCelebrity must be a boolean"))?;

        let updated = self
            .ctx
            .celebrity_repo()
            .set_is_celebrity(id, is_celebrity)
            .await?
            .ok_or(DomainError::CelebrityNotFound(id))?;

        info!(celebrity_id = %id, is_celebrity, "Celebrity visibility changed");
        Ok(CelebrityResponse::from(updated))
    }
}

fn clean_image_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}
