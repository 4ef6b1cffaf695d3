//! PostgreSQL implementation of the alias store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::{AliasCreator, AliasDeleter, AliasResolver};
use crate::error::{AppError, map_sqlx_error};
use crate::utils::db_error::is_unique_violation_on_alias;

/// PostgreSQL repository for alias mappings.
///
/// `alias` is the table primary key, so uniqueness is enforced by the
/// database and `create` is atomic with the check. All operations are
/// durable once the query returns.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    alias: String,
    target_url: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.alias, row.target_url, row.created_at)
    }
}

#[async_trait]
impl AliasCreator for PgAliasRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO mappings (alias, target_url)
            VALUES ($1, $2)
            RETURNING alias, target_url, created_at
            "#,
        )
        .bind(&new_mapping.alias)
        .bind(&new_mapping.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_alias(&e) {
                AppError::already_exists(
                    "Alias already exists",
                    json!({ "alias": new_mapping.alias }),
                )
            } else {
                map_sqlx_error(e)
            }
        })?;

        Ok(row.into())
    }
}

#[async_trait]
impl AliasResolver for PgAliasRepository {
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT alias, target_url, created_at
            FROM mappings
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UrlMapping::from))
    }
}

#[async_trait]
impl AliasDeleter for PgAliasRepository {
    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM mappings WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
