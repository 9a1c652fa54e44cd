//! PostgreSQL implementation of CelebrityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use celeb_core::entities::{Celebrity, CelebrityUpdate, NewCelebrity};
use celeb_core::traits::{CelebrityRepository, RepoResult};
use celeb_core::value_objects::EntityId;

use crate::mappers::CelebrityInsert;
use crate::models::CelebrityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CelebrityRepository
#[derive(Clone)]
pub struct PgCelebrityRepository {
    pool: PgPool,
}

impl PgCelebrityRepository {
    /// Create a new PgCelebrityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CelebrityRepository for PgCelebrityRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Celebrity>> {
        let results = sqlx::query_as::<_, CelebrityModel>(
            r#"
            SELECT id, name, image_url, is_celebrity, created_at
            FROM celebrities
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Celebrity::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Celebrity>> {
        let result = sqlx::query_as::<_, CelebrityModel>(
            r#"
            SELECT id, name, image_url, is_celebrity, created_at
            FROM celebrities
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Celebrity::from))
    }

    #[instrument(skip(self), fields(name = %celebrity.name))]
    async fn create(&self, celebrity: &NewCelebrity) -> RepoResult<Celebrity> {
        let insert = CelebrityInsert::new(celebrity);

        let result = sqlx::query_as::<_, CelebrityModel>(
            r#"
            INSERT INTO celebrities (name, image_url, is_celebrity)
            VALUES ($1, $2, COALESCE($3, FALSE))
            RETURNING id, name, image_url, is_celebrity, created_at
            "#,
        )
        .bind(insert.name)
        .bind(insert.image_url)
        .bind(insert.is_celebrity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Celebrity::from(result))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: EntityId, update: &CelebrityUpdate) -> RepoResult<Option<Celebrity>> {
        let values = CelebrityInsert::from_update(update);

        let result = sqlx::query_as::<_, CelebrityModel>(
            r#"
            UPDATE celebrities
            SET name = $2,
                image_url = $3,
                is_celebrity = COALESCE($4, is_celebrity)
            WHERE id = $1
            RETURNING id, name, image_url, is_celebrity, created_at
            "#,
        )
        .bind(id.into_inner())
        .bind(values.name)
        .bind(values.image_url)
        .bind(values.is_celebrity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Celebrity::from))
    }

    #[instrument(skip(self))]
    async fn set_is_celebrity(
        &self,
        id: EntityId,
        is_celebrity: bool,
    ) -> RepoResult<Option<Celebrity>> {
        let result = sqlx::query_as::<_, CelebrityModel>(
            r#"
            UPDATE celebrities
            SET is_celebrity = $2
            WHERE id = $1
            RETURNING id, name, image_url, is_celebrity, created_at
            "#,
        )
        .bind(id.into_inner())
        .bind(is_celebrity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Celebrity::from))
    }
}
