//! PostgreSQL implementation of HistoryRepository
//!
//! A single keyed row holds the previous request's outcome. Reads are
//! tolerant: unparseable stored values degrade to "no history" rather
//! than failing the request.

use async_trait::async_trait;
use sqlx::PgPool;

use kumo::{DomainError, FactId, HistoryRepository, RewriteState, Style};

const STATE_KEY: &str = "latest";

/// PostgreSQL implementation of HistoryRepository
pub struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    last_fact_id: Option<String>,
    last_style: Option<String>,
}

impl From<HistoryRow> for RewriteState {
    fn from(row: HistoryRow) -> Self {
        let last_fact_id = row.last_fact_id.as_deref().and_then(FactId::parse);
        let last_style = row
            .last_style
            .as_deref()
            .and_then(|s| s.parse::<Style>().ok());
        RewriteState::new(last_fact_id, last_style)
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn read(&self) -> Result<RewriteState, DomainError> {
        let row = sqlx::query_as::<_, HistoryRow>(
            "SELECT last_fact_id, last_style FROM rewrite_history WHERE key = $1",
        )
        .bind(STATE_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::HistoryUnavailable(e.to_string()))?;

        Ok(row.map(Into::into).unwrap_or_default())
    }

    async fn write(&self, fact_id: &FactId, style: Style) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO rewrite_history (key, last_fact_id, last_style, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (key) DO UPDATE
            SET last_fact_id = $2, last_style = $3, updated_at = NOW()
            "#,
        )
        .bind(STATE_KEY)
        .bind(fact_id.as_str())
        .bind(style.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::HistoryUnavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_row_degrades_to_no_history() {
        let row = HistoryRow {
            last_fact_id: Some("definitely-not-hex".to_string()),
            last_style: Some("bogus".to_string()),
        };
        let state: RewriteState = row.into();
        assert!(state.is_empty());
    }

    #[test]
    fn test_valid_row_round_trips() {
        let id = FactId::of("Servers love electricity.");
        let row = HistoryRow {
            last_fact_id: Some(id.to_string()),
            last_style: Some("self-deprecating".to_string()),
        };
        let state: RewriteState = row.into();
        assert_eq!(state.last_fact_id, Some(id));
        assert_eq!(state.last_style, Some(Style::SelfDeprecating));
    }
}
