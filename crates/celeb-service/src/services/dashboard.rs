//! Dashboard service - one consistent snapshot of every dashboard panel

use celeb_core::StatsSummary;
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{
    DashboardParams, DashboardResponse, StatsResponse, TopCelebrityResponse, WindowDefault,
    WindowResponse,
};

use super::analytics::AnalyticsService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ranking, reactions and stats for the same window and topic
    ///
    /// Stats are derived from the ranking itself so the panels always agree.
    /// Missing dates select the `timeRange` preset.
    #[instrument(skip(self, params))]
    pub async fn snapshot(&self, params: &DashboardParams) -> ServiceResult<DashboardResponse> {
        let query = params.query(self.ctx.today(), WindowDefault::Preset)?;
        let analytics = AnalyticsService::new(self.ctx);

        let (ranked, top_reactions) = tokio::try_join!(
            async {
                Ok::<_, ServiceError>(self.ctx.analytics_repo().top_celebrities(&query).await?)
            },
            analytics.top_reactions_for(&query),
        )?;

        let stats = StatsResponse::from(StatsSummary::from_ranked(&ranked));

        info!(
            window = %query.window,
            celebrities = ranked.len(),
            reactions = top_reactions.len(),
            "Dashboard snapshot built"
        );

        Ok(DashboardResponse {
            top_celebrities: ranked.into_iter().map(TopCelebrityResponse::from).collect(),
            top_reactions,
            stats,
            window: WindowResponse::from(query.window),
            last_updated: Utc::now(),
        })
    }
}
