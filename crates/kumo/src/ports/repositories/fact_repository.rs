//! Fact Repository Port
//!
//! Abstract interface for the backing fact store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Fact};

/// Repository interface for the fact pool
#[async_trait]
pub trait FactRepository: Send + Sync {
    /// Fetch every stored fact. An empty result is valid and distinct
    /// from `StoreUnavailable`.
    async fn list_all(&self) -> Result<Vec<Fact>, DomainError>;

    /// Add a fact to the pool
    async fn save(&self, fact: &Fact) -> Result<Fact, DomainError>;

    /// Remove a fact by storage id, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
