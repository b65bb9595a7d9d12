use async_trait::async_trait;
use sqlx::PgPool;

use super::db::DatabaseError;
use super::models::{InfographicRecord, NewInfographic};
use super::Catalog;

// Casts keep decoding stable whether the table was created with
// SERIAL/BIGSERIAL ids and TIMESTAMP/TIMESTAMPTZ creation times.
const RECORD_COLUMNS: &str = "id::BIGINT AS id, title, description, thumbnail_url, page_url, \
     category, category_color, created_at::TIMESTAMPTZ AS created_at";

/// PostgreSQL-backed catalog sharing one pool across all requests.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn list(&self) -> Result<Vec<InfographicRecord>, DatabaseError> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM infographics ORDER BY created_at DESC, id DESC"
        );
        let records = sqlx::query_as::<_, InfographicRecord>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn insert(&self, new: NewInfographic) -> Result<InfographicRecord, DatabaseError> {
        let query = format!(
            r#"
            INSERT INTO infographics (title, description, thumbnail_url, page_url, category, category_color)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {RECORD_COLUMNS}
            "#
        );
        let record = sqlx::query_as::<_, InfographicRecord>(&query)
            .bind(new.title)
            .bind(new.description)
            .bind(new.thumbnail_url)
            .bind(new.page_url)
            .bind(new.category)
            .bind(new.category_color)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM infographics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
