//! Alias service

use celeb_core::EntityId;
use tracing::{debug, info, instrument};

use crate::dto::requests::required_text;
use crate::dto::{AliasResponse, CreateAliasRequest, SuccessResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Alias service
pub struct AliasService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AliasService<'a> {
    /// Create a new AliasService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aliases of a celebrity ordered by alias text
    #[instrument(skip(self))]
    pub async fn list(&self, celebrity_id: EntityId) -> ServiceResult<Vec<AliasResponse>> {
        let aliases = self.ctx.alias_repo().find_by_celebrity(celebrity_id).await?;
        Ok(aliases.into_iter().map(AliasResponse::from).collect())
    }

    /// Attach an alias; duplicates are allowed and collapse in the roll-up
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        celebrity_id: EntityId,
        request: CreateAliasRequest,
    ) -> ServiceResult<AliasResponse> {
        let alias = required_text(request.alias.as_deref(), "Alias is required")?;

        let created = self.ctx.alias_repo().create(celebrity_id, &alias).await?;

        info!(celebrity_id = %celebrity_id, alias_id = %created.id, "Alias added");
        Ok(AliasResponse::from(created))
    }

    /// Delete an alias; deleting an absent alias still succeeds
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> ServiceResult<SuccessResponse> {
        if self.ctx.alias_repo().delete(id).await? {
            info!(alias_id = %id, "Alias deleted");
        } else {
            debug!(alias_id = %id, "Alias already absent");
        }
        Ok(SuccessResponse::ok())
    }
}
