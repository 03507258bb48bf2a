//! PostgreSQL implementation of FactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use kumo::{DomainError, Fact, FactRepository};

/// PostgreSQL implementation of FactRepository
pub struct PgFactRepository {
    pool: PgPool,
}

impl PgFactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct FactRow {
    id: Uuid,
    text: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<FactRow> for Fact {
    fn from(row: FactRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl FactRepository for PgFactRepository {
    async fn list_all(&self) -> Result<Vec<Fact>, DomainError> {
        let rows = sqlx::query_as::<_, FactRow>("SELECT * FROM facts ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, fact: &Fact) -> Result<Fact, DomainError> {
        let row = sqlx::query_as::<_, FactRow>(
            r#"
            INSERT INTO facts (id, text, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(fact.id)
        .bind(&fact.text)
        .bind(fact.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::Validation("a fact with this text already exists".to_string())
            }
            _ => DomainError::StoreUnavailable(e.to_string()),
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM facts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
