//! Analytics service
//!
//! Read-only aggregate views over interactions and reactions. Each endpoint
//! has its own policy for filling in dates the caller left out, see
//! [`WindowDefault`].

use celeb_core::{DashboardQuery, EntityId};
use tracing::{debug, instrument, warn};

use crate::dto::{
    DashboardParams, InteractionResponse, StatsResponse, TopCelebrityResponse,
    TopReactionResponse, WindowDefault,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Published celebrities ranked by the requested sentiment
    ///
    /// Missing dates default to today.
    #[instrument(skip(self, params))]
    pub async fn top_celebrities(
        &self,
        params: &DashboardParams,
    ) -> ServiceResult<Vec<TopCelebrityResponse>> {
        let query = params.query(self.ctx.today(), WindowDefault::Today)?;
        let ranked = self.ctx.analytics_repo().top_celebrities(&query).await?;

        debug!(window = %query.window, count = ranked.len(), "Ranked celebrities");
        Ok(ranked.into_iter().map(TopCelebrityResponse::from).collect())
    }

    /// Celebrities with the most reactions, restricted to the ranked set
    ///
    /// Both dates are required.
    #[instrument(skip(self, params))]
    pub async fn top_reactions(
        &self,
        params: &DashboardParams,
    ) -> ServiceResult<Vec<TopReactionResponse>> {
        let query = params.query(self.ctx.today(), WindowDefault::Required)?;
        self.top_reactions_for(&query).await
    }

    /// Shared by the dashboard snapshot
    pub(crate) async fn top_reactions_for(
        &self,
        query: &DashboardQuery,
    ) -> ServiceResult<Vec<TopReactionResponse>> {
        let candidates = self.candidates(query).await?;
        let limit = i64::from(self.ctx.analytics().top_reactions_limit);

        let rows = self
            .ctx
            .analytics_repo()
            .top_reactions_among(query.window, &candidates, limit)
            .await?;

        Ok(rows.into_iter().map(TopReactionResponse::from).collect())
    }

    /// Ranked candidate ids, warning when the configured cap truncates them
    async fn candidates(&self, query: &DashboardQuery) -> ServiceResult<Vec<EntityId>> {
        let cap = self.ctx.analytics().candidate_cap();
        let candidates = self
            .ctx
            .analytics_repo()
            .ranked_candidate_ids(query, cap)
            .await?;

        if let Some(cap) = cap {
            if i64::try_from(candidates.len()).unwrap_or(i64::MAX) >= cap {
                warn!(
                    cap,
                    window = %query.window,
                    "Top-reactions candidate set hit its cap; lower-ranked celebrities are excluded"
                );
            }
        }

        Ok(candidates)
    }

    /// Window-wide totals; missing dates default to today
    #[instrument(skip(self, params))]
    pub async fn stats(&self, params: &DashboardParams) -> ServiceResult<StatsResponse> {
        let query = params.query(self.ctx.today(), WindowDefault::Today)?;
        let stats = self
            .ctx
            .analytics_repo()
            .stats(query.window, &query.topic)
            .await?;

        Ok(StatsResponse::from(stats))
    }

    /// Raw interaction rows, newest first
    ///
    /// Missing dates look back `interactions_default_days` from today.
    #[instrument(skip(self, params))]
    pub async fn interactions(
        &self,
        params: &DashboardParams,
    ) -> ServiceResult<Vec<InteractionResponse>> {
        let days = self.ctx.analytics().interactions_default_days;
        let window = params.window(self.ctx.today(), WindowDefault::LookbackDays(days))?;
        let limit = params.limit()?;

        let rows = self
            .ctx
            .interaction_repo()
            .find_in_window(window, &params.topic(), limit)
            .await?;

        Ok(rows.into_iter().map(InteractionResponse::from).collect())
    }
}
