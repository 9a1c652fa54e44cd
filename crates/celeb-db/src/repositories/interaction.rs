//! PostgreSQL implementation of InteractionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use celeb_core::entities::Interaction;
use celeb_core::traits::{InteractionRepository, RepoResult};
use celeb_core::value_objects::{DateWindow, TopicFilter};

use crate::models::InteractionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of InteractionRepository
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    /// Create a new PgInteractionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self, window, topic), fields(window = %window, topic = %topic))]
    async fn find_in_window(
        &self,
        window: DateWindow,
        topic: &TopicFilter,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Interaction>> {
        // LIMIT NULL is no limit
        let results = sqlx::query_as::<_, InteractionModel>(
            r#"
            SELECT i.id, i.celebrity_id, c.name AS celebrity_name, c.is_celebrity,
                   i.positive_count, i.negative_count, i.neutral_count,
                   i.field, i.interaction_date, i.created_at
            FROM interactions i
            JOIN celebrities c ON c.id = i.celebrity_id
            WHERE c.is_celebrity = TRUE
              AND i.interaction_date BETWEEN $1 AND $2
              AND ($3::TEXT IS NULL OR i.field = $3)
            ORDER BY i.interaction_date DESC, i.created_at DESC, i.id DESC
            LIMIT $4
            "#,
        )
        .bind(window.start())
        .bind(window.end())
        .bind(topic.as_topic())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Interaction::from).collect())
    }
}
