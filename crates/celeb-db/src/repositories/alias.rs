//! PostgreSQL implementation of AliasRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use celeb_core::entities::CelebrityAlias;
use celeb_core::traits::{AliasRepository, RepoResult};
use celeb_core::value_objects::EntityId;

use crate::models::AliasModel;

use super::error::{celebrity_not_found, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of AliasRepository
#[derive(Clone)]
pub struct PgAliasRepository {
    pool: PgPool,
}

impl PgAliasRepository {
    /// Create a new PgAliasRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    #[instrument(skip(self))]
    async fn find_by_celebrity(&self, celebrity_id: EntityId) -> RepoResult<Vec<CelebrityAlias>> {
        let results = sqlx::query_as::<_, AliasModel>(
            r#"
            SELECT id, celebrity_id, alias, created_at
            FROM celebrity_aliases
            WHERE celebrity_id = $1
            ORDER BY alias, id
            "#,
        )
        .bind(celebrity_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CelebrityAlias::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, celebrity_id: EntityId, alias: &str) -> RepoResult<CelebrityAlias> {
        let result = sqlx::query_as::<_, AliasModel>(
            r#"
            INSERT INTO celebrity_aliases (celebrity_id, alias)
            VALUES ($1, $2)
            RETURNING id, celebrity_id, alias, created_at
            "#,
        )
        .bind(celebrity_id.into_inner())
        .bind(alias.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || celebrity_not_found(celebrity_id)))?;

        Ok(CelebrityAlias::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM celebrity_aliases WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        let deleted = result.rows_affected() > 0;
        if !deleted {
            debug!(alias_id = %id, "Alias already absent");
        }
        Ok(deleted)
    }
}
