//! History Repository Port
//!
//! Abstract interface for the small-state store backing anti-repeat memory.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, FactId, RewriteState, Style};

/// Repository interface for the last-served rewrite state
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Read the previous request's outcome. A missing record yields the
    /// default (empty) state, not an error.
    async fn read(&self) -> Result<RewriteState, DomainError>;

    /// Record the outcome of the current request. Callers treat failure
    /// as non-fatal.
    async fn write(&self, fact_id: &FactId, style: Style) -> Result<(), DomainError>;
}
