//! Builtin fact pool
//!
//! A fixed in-memory pool used when `USE_BUILTIN_FACTS` is set: the
//! degenerate configuration that runs with no database-backed pool at all.
//! Read-only by design.

use async_trait::async_trait;
use uuid::Uuid;

use kumo::{DomainError, Fact, FactRepository};

const CLOUD_FACTS: [&str; 8] = [
    "The cloud is just someone else's computer.",
    "Servers hum in warehouses larger than football fields.",
    "Data centers are often built next to rivers for cheap cooling.",
    "Most outages are caused by configuration changes, not hardware.",
    "Object storage happily hoards trillions of files without complaint.",
    "Autoscaling means your app grows while you sleep.",
    "Half the web leans on a handful of cloud regions.",
    "Serverless still runs on servers, just not yours.",
];

/// In-memory implementation of FactRepository over a fixed pool
pub struct BuiltinFactRepository {
    facts: Vec<Fact>,
}

impl BuiltinFactRepository {
    pub fn new() -> Self {
        Self {
            facts: CLOUD_FACTS.iter().copied().map(Fact::new).collect(),
        }
    }
}

impl Default for BuiltinFactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactRepository for BuiltinFactRepository {
    async fn list_all(&self) -> Result<Vec<Fact>, DomainError> {
        Ok(self.facts.clone())
    }

    async fn save(&self, _fact: &Fact) -> Result<Fact, DomainError> {
        Err(DomainError::Unsupported(
            "the builtin fact pool is read-only".to_string(),
        ))
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
        Err(DomainError::Unsupported(
            "the builtin fact pool is read-only".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_is_nonempty_and_stable() {
        let repo = BuiltinFactRepository::new();
        let first = repo.list_all().await.unwrap();
        let second = repo.list_all().await.unwrap();
        assert_eq!(first.len(), CLOUD_FACTS.len());
        assert_eq!(
            first.iter().map(Fact::fingerprint).collect::<Vec<_>>(),
            second.iter().map(Fact::fingerprint).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_mutations_are_unsupported() {
        let repo = BuiltinFactRepository::new();
        let err = repo.save(&Fact::new("new fact")).await.unwrap_err();
        assert!(matches!(err, DomainError::Unsupported(_)));
        let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::Unsupported(_)));
    }
}
