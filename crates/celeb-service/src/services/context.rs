//! Service context - dependency container for services
//!
//! Holds the repositories, the pool (for readiness probes) and the analytics
//! tunables needed by services.

use std::sync::Arc;

use celeb_common::AnalyticsConfig;
use celeb_core::traits::{
    AliasRepository, AnalyticsRepository, CelebrityRepository, InteractionRepository,
};
use celeb_db::PgPool;
use chrono::{NaiveDate, Utc};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc` or is itself a handle.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    celebrity_repo: Arc<dyn CelebrityRepository>,
    alias_repo: Arc<dyn AliasRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,
    analytics_repo: Arc<dyn AnalyticsRepository>,

    // Settings
    analytics: AnalyticsConfig,
    /// Pinned "today" (tests); `None` uses the UTC calendar date
    fixed_today: Option<NaiveDate>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        celebrity_repo: Arc<dyn CelebrityRepository>,
        alias_repo: Arc<dyn AliasRepository>,
        interaction_repo: Arc<dyn InteractionRepository>,
        analytics_repo: Arc<dyn AnalyticsRepository>,
        analytics: AnalyticsConfig,
    ) -> Self {
        Self {
            pool,
            celebrity_repo,
            alias_repo,
            interaction_repo,
            analytics_repo,
            analytics,
            fixed_today: None,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn celebrity_repo(&self) -> &dyn CelebrityRepository {
        self.celebrity_repo.as_ref()
    }

    pub fn alias_repo(&self) -> &dyn AliasRepository {
        self.alias_repo.as_ref()
    }

    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    pub fn analytics_repo(&self) -> &dyn AnalyticsRepository {
        self.analytics_repo.as_ref()
    }

    // === Settings ===

    pub fn analytics(&self) -> &AnalyticsConfig {
        &self.analytics
    }

    /// Current calendar date used to default date windows
    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("analytics", &self.analytics)
            .field("fixed_today", &self.fixed_today)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    celebrity_repo: Option<Arc<dyn CelebrityRepository>>,
    alias_repo: Option<Arc<dyn AliasRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
    analytics_repo: Option<Arc<dyn AnalyticsRepository>>,
    analytics: AnalyticsConfig,
    fixed_today: Option<NaiveDate>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn celebrity_repo(mut self, repo: Arc<dyn CelebrityRepository>) -> Self {
        self.celebrity_repo = Some(repo);
        self
    }

    pub fn alias_repo(mut self, repo: Arc<dyn AliasRepository>) -> Self {
        self.alias_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    pub fn analytics_repo(mut self, repo: Arc<dyn AnalyticsRepository>) -> Self {
        self.analytics_repo = Some(repo);
        self
    }

    pub fn analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }

    /// Pin the date services treat as "today"
    pub fn fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        let mut ctx = ServiceContext::new(
            self.pool.ok_or_else(|| missing("pool"))?,
            self.celebrity_repo.ok_or_else(|| missing("celebrity_repo"))?,
            self.alias_repo.ok_or_else(|| missing("alias_repo"))?,
            self.interaction_repo.ok_or_else(|| missing("interaction_repo"))?,
            self.analytics_repo.ok_or_else(|| missing("analytics_repo"))?,
            self.analytics,
        );
        ctx.fixed_today = self.fixed_today;
        Ok(ctx)
    }
}
