//! PostgreSQL implementation of AnalyticsRepository
//!
//! Every ranking and summary is computed from the same `qualifying` CTE so
//! that stats always equal the sum of the ranked rows for a window/topic.
//!
//! Bind order shared by the CTE: `$1` window start, `$2` window end,
//! `$3` topic (NULL for all).

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use celeb_core::entities::{StatsSummary, TopCelebrity, TopReactionCelebrity};
use celeb_core::traits::{AnalyticsRepository, RepoResult};
use celeb_core::value_objects::{DashboardQuery, DateWindow, EntityId, TopicFilter};

use crate::models::{StatsModel, TopCelebrityModel, TopReactionModel};

use super::error::map_db_error;

/// Per-celebrity sums over published celebrities with interactions in the
/// window (and topic), excluding celebrities whose sum is zero
///
/// Counts are widened before adding; a single row may exceed `INTEGER`.
macro_rules! qualifying_cte {
    () => {
        r#"
        WITH qualifying AS (
            SELECT i.celebrity_id,
                   SUM(i.positive_count)::BIGINT AS total_positive,
                   SUM(i.negative_count)::BIGINT AS total_negative,
                   SUM(i.neutral_count)::BIGINT AS total_neutral,
                   SUM(i.positive_count::BIGINT + i.negative_count::BIGINT
                       + i.neutral_count::BIGINT)::BIGINT AS total_interactions,
                   ARRAY_AGG(DISTINCT TRIM(i.field)) FILTER (
                       WHERE i.field IS NOT NULL AND TRIM(i.field) NOT IN ('', 'null')
                   ) AS main_aspects
            FROM interactions i
            JOIN celebrities c ON c.id = i.celebrity_id
            WHERE c.is_celebrity = TRUE
              AND i.interaction_date BETWEEN $1 AND $2
              AND ($3::TEXT IS NULL OR i.field = $3)
            GROUP BY i.celebrity_id
            HAVING SUM(i.positive_count::BIGINT + i.negative_count::BIGINT
                       + i.neutral_count::BIGINT) > 0
        )
        "#
    };
}

/// Ranking expression; `$4` is the sentiment filter
macro_rules! rank_order {
    () => {
        r#"
        ORDER BY CASE $4
                     WHEN 'positive' THEN q.total_positive
                     WHEN 'negative' THEN q.total_negative
                     ELSE q.total_interactions
                 END DESC,
                 q.celebrity_id ASC
        "#
    };
}

/// PostgreSQL implementation of AnalyticsRepository
#[derive(Clone)]
pub struct PgAnalyticsRepository {
    pool: PgPool,
}

impl PgAnalyticsRepository {
    /// Create a new PgAnalyticsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    #[instrument(skip(self, query), fields(window = %query.window, topic = %query.topic, sentiment = %query.sentiment))]
    async fn top_celebrities(&self, query: &DashboardQuery) -> RepoResult<Vec<TopCelebrity>> {
        let results = sqlx::query_as::<_, TopCelebrityModel>(concat!(
            qualifying_cte!(),
            r#"
            , window_reactions AS (
                SELECT r.celebrity_id, SUM(r.total_reactions)::BIGINT AS total_reactions
                FROM reactions r
                WHERE r.created_at::date BETWEEN $1 AND $2
                GROUP BY r.celebrity_id
            ),
            alias_rollup AS (
                SELECT a.celebrity_id, ARRAY_AGG(a.alias ORDER BY a.id) AS aliases
                FROM celebrity_aliases a
                GROUP BY a.celebrity_id
            )
            SELECT c.id AS celebrity_id,
                   c.name AS celebrity_name,
                   c.image_url,
                   c.is_celebrity,
                   COALESCE(al.aliases, ARRAY[]::TEXT[]) AS aliases,
                   q.total_positive,
                   q.total_negative,
                   q.total_neutral,
                   COALESCE(q.main_aspects, ARRAY[]::TEXT[]) AS main_aspects,
                   COALESCE(wr.total_reactions, 0)::BIGINT AS total_reactions
            FROM qualifying q
            JOIN celebrities c ON c.id = q.celebrity_id
            LEFT JOIN window_reactions wr ON wr.celebrity_id = q.celebrity_id
            LEFT JOIN alias_rollup al ON al.celebrity_id = q.celebrity_id
            "#,
            rank_order!(),
        ))
        .bind(query.window.start())
        .bind(query.window.end())
        .bind(query.topic.as_topic())
        .bind(query.sentiment.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TopCelebrity::from).collect())
    }

    #[instrument(skip(self, query), fields(window = %query.window, topic = %query.topic, sentiment = %query.sentiment))]
    async fn ranked_candidate_ids(
        &self,
        query: &DashboardQuery,
        cap: Option<i64>,
    ) -> RepoResult<Vec<EntityId>> {
        let results = sqlx::query_scalar::<_, i64>(concat!(
            qualifying_cte!(),
            r#"
            SELECT q.celebrity_id
            FROM qualifying q
            "#,
            rank_order!(),
            r#"
            LIMIT $5
            "#,
        ))
        .bind(query.window.start())
        .bind(query.window.end())
        .bind(query.topic.as_topic())
        .bind(query.sentiment.as_str())
        .bind(cap)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EntityId::new).collect())
    }

    #[instrument(skip(self, candidates), fields(window = %window, candidates = candidates.len()))]
    async fn top_reactions_among(
        &self,
        window: DateWindow,
        candidates: &[EntityId],
        limit: i64,
    ) -> RepoResult<Vec<TopReactionCelebrity>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = candidates.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, TopReactionModel>(
            r#"
            SELECT c.id AS celebrity_id,
                   c.name AS celebrity_name,
                   c.image_url,
                   SUM(r.total_reactions)::BIGINT AS total_reactions
            FROM reactions r
            JOIN celebrities c ON c.id = r.celebrity_id
            WHERE r.celebrity_id = ANY($1)
              AND r.created_at::date BETWEEN $2 AND $3
            GROUP BY c.id, c.name, c.image_url
            HAVING SUM(r.total_reactions) > 0
            ORDER BY total_reactions DESC, c.id ASC
            LIMIT $4
            "#,
        )
        .bind(ids)
        .bind(window.start())
        .bind(window.end())
        .bind(limit.max(1))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TopReactionCelebrity::from).collect())
    }

    #[instrument(skip(self, window, topic), fields(window = %window, topic = %topic))]
    async fn stats(&self, window: DateWindow, topic: &TopicFilter) -> RepoResult<StatsSummary> {
        let result = sqlx::query_as::<_, StatsModel>(concat!(
            qualifying_cte!(),
            r#"
            SELECT COALESCE(SUM(q.total_positive), 0)::BIGINT AS total_positive,
                   COALESCE(SUM(q.total_negative), 0)::BIGINT AS total_negative,
                   COALESCE(SUM(q.total_neutral), 0)::BIGINT AS total_neutral,
                   COUNT(DISTINCT q.celebrity_id)::BIGINT AS total_celebrities
            FROM qualifying q
            "#,
        ))
        .bind(window.start())
        .bind(window.end())
        .bind(topic.as_topic())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(StatsSummary::from(result))
    }
}
