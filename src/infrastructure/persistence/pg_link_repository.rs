//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::domain::short_code::ShortCode;
use crate::error::AppError;

/// PostgreSQL repository for link storage and visit accounting.
///
/// Queries are runtime-checked and parameterized. The visit increment is a
/// single `UPDATE` statement, so concurrent visits to the same code are
/// serialized by the database row lock and none are lost.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>, AppError> {
        let record = sqlx::query_as::<_, LinkRecord>(
            "SELECT code, destination, visit_count FROM links WHERE code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_visit(&self, code: &ShortCode) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET visit_count = visit_count + 1 WHERE code = $1")
            .bind(code.as_str())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
