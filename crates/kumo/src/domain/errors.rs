//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
///
/// Only `StoreUnavailable` and `InvalidItem` abort a witty-fact request;
/// everything downstream of having a fact in hand is absorbed by the
/// pipeline and masked behind the local fallback.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Fact store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid fact record: {0}")]
    InvalidItem(String),

    #[error("History store unavailable: {0}")]
    HistoryUnavailable(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Stable machine-readable kind, used as the `error` field of wire
    /// error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::StoreUnavailable(_) => "StoreUnavailable",
            DomainError::InvalidItem(_) => "InvalidItem",
            DomainError::HistoryUnavailable(_) => "HistoryUnavailable",
            DomainError::NotFound { .. } => "NotFound",
            DomainError::Validation(_) => "Validation",
            DomainError::Unsupported(_) => "Unsupported",
        }
    }
}
