//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Celebrity, CelebrityAlias, CelebrityUpdate, Interaction, NewCelebrity, StatsSummary,
    TopCelebrity, TopReactionCelebrity,
};
use crate::error::DomainError;
use crate::value_objects::{DashboardQuery, DateWindow, EntityId, TopicFilter};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Celebrity Repository
// ============================================================================

#[async_trait]
pub trait CelebrityRepository: Send + Sync {
    /// List all celebrities ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Celebrity>>;

    /// Find celebrity by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Celebrity>>;

    /// Insert a celebrity and return the stored row
    async fn create(&self, celebrity: &NewCelebrity) -> RepoResult<Celebrity>;

    /// Overwrite editable fields; `None` if the celebrity does not exist
    async fn update(&self, id: EntityId, update: &CelebrityUpdate) -> RepoResult<Option<Celebrity>>;

    /// Set only the published flag; `None` if the celebrity does not exist
    async fn set_is_celebrity(&self, id: EntityId, is_celebrity: bool)
        -> RepoResult<Option<Celebrity>>;
}

// ============================================================================
// Alias Repository
// ============================================================================

#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// List a celebrity's aliases ordered by alias text
    async fn find_by_celebrity(&self, celebrity_id: EntityId) -> RepoResult<Vec<CelebrityAlias>>;

    /// Insert an alias
    ///
    /// Fails with `CelebrityNotFound` when the celebrity does not exist.
    async fn create(&self, celebrity_id: EntityId, alias: &str) -> RepoResult<CelebrityAlias>;

    /// Delete an alias, returning whether a row was removed
    async fn delete(&self, id: EntityId) -> RepoResult<bool>;
}

// ============================================================================
// Interaction Repository
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Interactions of published celebrities in the window, newest first
    async fn find_in_window(
        &self,
        window: DateWindow,
        topic: &TopicFilter,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Interaction>>;
}

// ============================================================================
// Analytics Repository
// ============================================================================

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Published celebrities with interactions in the window, ranked by the
    /// query's sentiment (ties by id ascending)
    async fn top_celebrities(&self, query: &DashboardQuery) -> RepoResult<Vec<TopCelebrity>>;

    /// Ids that qualify for the top-celebrities ranking, in ranking order,
    /// truncated to `cap` when given
    async fn ranked_candidate_ids(
        &self,
        query: &DashboardQuery,
        cap: Option<i64>,
    ) -> RepoResult<Vec<EntityId>>;

    /// Among `candidates`, celebrities with reactions in the window ordered by
    /// reaction sum descending
    async fn top_reactions_among(
        &self,
        window: DateWindow,
        candidates: &[EntityId],
        limit: i64,
    ) -> RepoResult<Vec<TopReactionCelebrity>>;

    /// Window-wide totals over qualifying celebrities
    async fn stats(&self, window: DateWindow, topic: &TopicFilter) -> RepoResult<StatsSummary>;
}
